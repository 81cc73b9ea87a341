mod fetch;

pub use fetch::{PODCAST_API_URL, fetch_podcasts, fetch_podcasts_from};
