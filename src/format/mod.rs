mod date;
mod genre;

pub use date::{format_last_updated, format_last_updated_at};
pub use genre::{GENRE_TITLES, genre_title, genre_titles_from_ids};
