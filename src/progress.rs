use std::sync::Arc;

/// Events emitted while the catalogue is loaded
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Request to the catalogue endpoint is being sent
    FetchingPodcasts { url: String },

    /// The response was read; `count` is 0 for empty or non-list responses
    PodcastsLoaded { count: usize },

    /// The fetch failed; `error` is the underlying detail
    LoadFailed { error: String },

    /// The fetch settled, whatever the outcome. Always the last event.
    LoadSettled,
}

/// Trait for reporting progress events while loading.
///
/// Implementations can use this to display a spinner, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
