// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Fixed bucket divisors; not calendar months or years
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

const UNKNOWN: &str = "Updated date unknown";

/// Describe how long ago `updated` was, relative to now
pub fn format_last_updated(updated: Option<&str>) -> String {
    format_last_updated_at(updated, Utc::now())
}

/// Describe how long ago `updated` was, relative to `now`
///
/// Absent, unparseable and future timestamps all yield "Updated date unknown".
pub fn format_last_updated_at(updated: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(updated) = updated.and_then(parse_timestamp) else {
        return UNKNOWN.to_string();
    };

    let days = (now - updated).num_milliseconds().div_euclid(MS_PER_DAY);
    if days < 0 {
        return UNKNOWN.to_string();
    }

    relative_label(days)
}

fn relative_label(days: i64) -> String {
    match days {
        0 => return "Updated today".to_string(),
        1 => return "Updated 1 day ago".to_string(),
        d if d < DAYS_PER_MONTH => return format!("Updated {d} days ago"),
        _ => {}
    }

    match days / DAYS_PER_MONTH {
        1 => return "Updated 1 month ago".to_string(),
        m if m < 12 => return format!("Updated {m} months ago"),
        _ => {}
    }

    match days / DAYS_PER_YEAR {
        1 => "Updated 1 year ago".to_string(),
        y => format!("Updated {y} years ago"),
    }
}

/// Parse the timestamp shapes the catalogue is known to carry
///
/// Timestamps without an offset are taken as UTC.
fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    for format in naive_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
