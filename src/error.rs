use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching the podcast catalogue
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch podcasts from {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Response from {url} is not valid JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when writing rendered output
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write page {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_names_url_and_status() {
        let error = FetchError::HttpStatus {
            url: "https://example.com/".to_string(),
            status: 503,
        };
        assert_eq!(error.to_string(), "HTTP error 503 for https://example.com/");
    }

    #[test]
    fn invalid_json_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FetchError::InvalidJson {
            url: "https://example.com/".to_string(),
            source,
        };
        assert!(error.source().is_some());
    }
}
