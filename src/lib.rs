pub mod api;
pub mod app;
pub mod error;
pub mod format;
pub mod http;
pub mod podcast;
pub mod progress;
pub mod render;
pub mod view;

// Re-export main types for convenience
pub use api::{PODCAST_API_URL, fetch_podcasts, fetch_podcasts_from};
pub use app::{App, DisplayState, Screen};
pub use error::{FetchError, RenderError};
pub use format::{format_last_updated, format_last_updated_at, genre_titles_from_ids};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use podcast::{PodcastRecord, podcasts_from_value};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use render::{render_html, render_terminal, write_html};
pub use view::{KeyedCard, PodcastCard, PodcastGrid};
