// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One show from the podcast catalogue
///
/// The catalogue is not validated, so every field is read leniently: values
/// of the wrong type fall back to a default instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PodcastRecord {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub seasons: u64,
    /// `None` when the catalogue sent something other than a list
    #[serde(deserialize_with = "lenient_genres")]
    pub genres: Option<Vec<i64>>,
    /// Raw timestamp, parsed only when formatted
    #[serde(deserialize_with = "lenient_string")]
    pub updated: Option<String>,
}

impl PodcastRecord {
    /// Read a record from any JSON value; non-objects become an empty record
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Identity used to key the record in a grid: the id, else the title
    pub fn key(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.title.as_deref().filter(|t| !t.is_empty()))
    }
}

/// Read the catalogue response as a list of records
///
/// Returns `None` when the response is not a JSON array.
pub fn podcasts_from_value(value: &Value) -> Option<Vec<PodcastRecord>> {
    value
        .as_array()
        .map(|items| items.iter().map(PodcastRecord::from_value).collect())
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let id = match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    };
    Ok(id)
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64().unwrap_or(0))
}

fn lenient_genres<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error> {
    let genres = Value::deserialize(deserializer)?
        .as_array()
        .map(|ids| ids.iter().filter_map(genre_id).collect());
    Ok(genres)
}

/// Whole numbers, including `3.0` and the canonical string `"3"`, are ids
fn genre_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.parse::<i64>().ok().filter(|id| id.to_string() == *s),
        _ => None,
    }
}
