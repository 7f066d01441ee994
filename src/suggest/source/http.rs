//! HTTP geocoding endpoint client
//!
//! Issues `GET <endpoint>?q=<query>&count=<n>` and maps the status
//! taxonomy of the endpoint onto `LookupOutcome`:
//! 200 places, 400 malformed, 404 not found, anything else upstream error.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::StatusCode;

use super::{LookupError, LookupOutcome, LookupResult, PlaceSource};
use crate::error::CityscoutError;
use crate::place::Place;

/// Geocoding client backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpPlaceSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPlaceSource {
    /// Create a client for `endpoint`
    ///
    /// `timeout` bounds the whole request; `None` leaves it to reqwest.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, CityscoutError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the lookup request without sending it
    pub fn build_request(&self, query: &str, count: usize) -> Result<reqwest::Request, reqwest::Error> {
        let count = count.to_string();
        self.client
            .get(&self.endpoint)
            .query(&[("q", query), ("count", count.as_str())])
            .build()
    }

    async fn fetch(&self, query: &str, count: usize) -> LookupResult {
        let request = self
            .build_request(query, count)
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        classify_response(status, &body)
    }
}

impl PlaceSource for HttpPlaceSource {
    fn lookup<'a>(&'a self, query: &'a str, count: usize) -> BoxFuture<'a, LookupResult> {
        Box::pin(self.fetch(query, count))
    }
}

/// Map an HTTP status and body onto a lookup result
///
/// Only success bodies are decoded; error bodies are ignored.
pub fn classify_response(status: StatusCode, body: &[u8]) -> LookupResult {
    match status {
        StatusCode::BAD_REQUEST => Ok(LookupOutcome::Malformed),
        StatusCode::NOT_FOUND => Ok(LookupOutcome::NotFound),
        status if status.is_success() => serde_json::from_slice::<Vec<Place>>(body)
            .map(LookupOutcome::Places)
            .map_err(|e| LookupError::Decode(e.to_string())),
        status => Err(LookupError::Upstream {
            status: status.as_u16(),
        }),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
