mod card;
mod grid;

pub use card::{PodcastCard, season_label};
pub use grid::{KeyedCard, PodcastGrid};
