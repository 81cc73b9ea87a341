// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use crate::format::{format_last_updated_at, genre_titles_from_ids};
use crate::podcast::PodcastRecord;

const UNTITLED: &str = "Untitled podcast";

/// Everything a renderer needs to draw one podcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastCard {
    /// Cover art URL
    pub image: Option<String>,
    /// Text shown in place of the cover when it cannot be displayed
    pub alt_text: String,
    pub title: String,
    pub season_label: String,
    /// Genre tags; renderers omit the tag list entirely when empty
    pub genres: Vec<&'static str>,
    pub updated: String,
}

impl PodcastCard {
    /// Build the card for `record`, measuring "last updated" against `now`
    pub fn from_record(record: &PodcastRecord, now: DateTime<Utc>) -> Self {
        let title = record
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        Self {
            image: record.image.clone(),
            alt_text: record.title.clone().unwrap_or_default(),
            title,
            season_label: season_label(record.seasons),
            genres: genre_titles_from_ids(record.genres.as_deref()),
            updated: format_last_updated_at(record.updated.as_deref(), now),
        }
    }
}

/// "1 season" or "N seasons"
pub fn season_label(seasons: u64) -> String {
    if seasons == 1 {
        "1 season".to_string()
    } else {
        format!("{seasons} seasons")
    }
}
