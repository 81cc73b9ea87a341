// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::api::fetch_podcasts_from;
use crate::http::HttpClient;
use crate::podcast::{PodcastRecord, podcasts_from_value};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::view::PodcastGrid;

pub const LOADING_MESSAGE: &str = "Loading podcasts...";
pub const LOAD_ERROR_MESSAGE: &str = "Sorry, we could not load podcasts. Please try again.";
pub const EMPTY_MESSAGE: &str = "No podcasts found.";
pub const PAGE_TITLE: &str = "Podcast Landing Page";

/// What the application is currently showing
///
/// Exactly one state applies at a time, so loading always wins over an
/// error, and an error over an empty or populated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error(String),
    Empty,
    /// Never holds an empty list
    Populated(Vec<PodcastRecord>),
}

impl DisplayState {
    /// State for a successfully decoded response
    ///
    /// Anything other than a non-empty JSON array counts as "no podcasts".
    pub fn from_response(value: &Value) -> Self {
        match podcasts_from_value(value) {
            Some(podcasts) if !podcasts.is_empty() => Self::Populated(podcasts),
            _ => Self::Empty,
        }
    }

    /// Status line for the non-grid states
    pub fn status_message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Error(message) => Some(message.as_str()),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Populated(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A fully resolved screen, ready for a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// A single status line (loading, error or empty)
    Status(String),
    Grid {
        title: String,
        /// "Total podcasts loaded: N"
        subtitle: String,
        grid: PodcastGrid,
    },
}

impl Screen {
    pub fn from_state(state: &DisplayState, now: DateTime<Utc>) -> Self {
        match state {
            DisplayState::Populated(podcasts) => Screen::Grid {
                title: PAGE_TITLE.to_string(),
                subtitle: format!("Total podcasts loaded: {}", podcasts.len()),
                grid: PodcastGrid::from_records(podcasts, now),
            },
            other => Screen::Status(other.status_message().unwrap_or_default().to_string()),
        }
    }
}

/// Application root: owns the display state and loads the catalogue into it
pub struct App<C> {
    client: C,
    endpoint: String,
    state: DisplayState,
    reporter: SharedProgressReporter,
}

impl<C: HttpClient> App<C> {
    /// Create the app in the `Loading` state; nothing is fetched until `load`
    pub fn new(client: C, endpoint: impl Into<String>, reporter: SharedProgressReporter) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            state: DisplayState::Loading,
            reporter,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the catalogue once and settle into Error, Empty or Populated
    ///
    /// The app is borrowed for the whole fetch, so a result can never be
    /// applied to an app that no longer exists.
    pub async fn load(&mut self) -> &DisplayState {
        self.state = DisplayState::Loading;
        self.reporter.report(ProgressEvent::FetchingPodcasts {
            url: self.endpoint.clone(),
        });

        self.state = match fetch_podcasts_from(&self.client, &self.endpoint).await {
            Ok(value) => {
                let state = DisplayState::from_response(&value);
                let count = match &state {
                    DisplayState::Populated(podcasts) => podcasts.len(),
                    _ => 0,
                };
                debug!("loaded {count} podcasts from {}", self.endpoint());
                self.reporter.report(ProgressEvent::PodcastsLoaded { count });
                state
            }
            Err(e) => {
                // Detail stays below the default log level; users see the fixed message
                debug!("{e}");
                self.reporter.report(ProgressEvent::LoadFailed {
                    error: e.to_string(),
                });
                DisplayState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        };

        self.reporter.report(ProgressEvent::LoadSettled);
        &self.state
    }

    /// Resolve the current state into a screen
    pub fn screen(&self, now: DateTime<Utc>) -> Screen {
        Screen::from_state(&self.state, now)
    }
}
