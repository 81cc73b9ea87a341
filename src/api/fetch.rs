// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::debug;
use serde_json::Value;

use crate::error::FetchError;
use crate::http::HttpClient;

/// Public endpoint serving the podcast catalogue
pub const PODCAST_API_URL: &str = "https://podcast-api.netlify.app/";

/// Fetch the podcast catalogue from the public endpoint
pub async fn fetch_podcasts<C: HttpClient>(client: &C) -> Result<Value, FetchError> {
    fetch_podcasts_from(client, PODCAST_API_URL).await
}

/// Fetch the podcast catalogue from `url`
///
/// Issues a single GET with no retry. The decoded JSON is returned as-is;
/// deciding whether it is a usable list is left to the caller.
pub async fn fetch_podcasts_from<C: HttpClient>(client: &C, url: &str) -> Result<Value, FetchError> {
    debug!("GET {url}");

    let response = client
        .get(url)
        .await
        .map_err(|e| FetchError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

    debug!("{url} answered {} ({} bytes)", response.status, response.body.len());

    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| FetchError::InvalidJson {
        url: url.to_string(),
        source: e,
    })
}
