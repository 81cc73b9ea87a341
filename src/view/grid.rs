// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use super::card::PodcastCard;
use crate::podcast::PodcastRecord;

/// A card paired with the key identifying its record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCard {
    /// Record id, else its title. Not guaranteed unique: two records
    /// without an id that share a title get the same key.
    pub key: Option<String>,
    pub card: PodcastCard,
}

/// Cards for a list of podcasts, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodcastGrid {
    pub cards: Vec<KeyedCard>,
}

impl PodcastGrid {
    pub fn from_records(records: &[PodcastRecord], now: DateTime<Utc>) -> Self {
        let cards = records
            .iter()
            .map(|record| KeyedCard {
                key: record.key().map(String::from),
                card: PodcastCard::from_record(record, now),
            })
            .collect();

        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
