// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use bytes::Bytes;

/// A fully buffered HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client abstraction for testability
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a plain GET request and buffer the whole body
    async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestClient with a custom reqwest::Client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}

/// Canned HTTP client shared by the unit tests
#[cfg(test)]
pub(crate) mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    pub(crate) enum Reply {
        Status(u16, String),
        TransportError,
    }

    pub(crate) struct MockHttpClient {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl MockHttpClient {
        pub(crate) fn ok(body: impl Into<String>) -> Self {
            Self::replying(Reply::Status(200, body.into()))
        }

        pub(crate) fn status(status: u16) -> Self {
            Self::replying(Reply::Status(status, String::new()))
        }

        pub(crate) fn unreachable() -> Self {
            Self::replying(Reply::TransportError)
        }

        fn replying(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.reply {
                Reply::Status(status, body) => Ok(HttpResponse {
                    status: *status,
                    body: Bytes::from(body.clone()),
                }),
                // An unparseable URL fails inside reqwest before any I/O
                Reply::TransportError => match reqwest::Client::new().get("not a url").send().await {
                    Ok(_) => unreachable!("request to an invalid URL cannot succeed"),
                    Err(e) => Err(e),
                },
            }
        }
    }
}
