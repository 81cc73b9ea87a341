// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Display titles for the catalogue's numeric genre ids
pub static GENRE_TITLES: [(i64, &str); 9] = [
    (1, "Personal Growth"),
    (2, "Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Look up the display title for a single genre id
pub fn genre_title(id: i64) -> Option<&'static str> {
    GENRE_TITLES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, title)| *title)
}

/// Map genre ids to display titles
///
/// Unknown ids are skipped. Order and duplicates follow the input; `None`
/// (a record whose genres were not a list) maps to nothing.
pub fn genre_titles_from_ids(ids: Option<&[i64]>) -> Vec<&'static str> {
    ids.unwrap_or_default()
        .iter()
        .filter_map(|&id| genre_title(id))
        .collect()
}
