//! Place lookup sources
//!
//! Defines the `PlaceSource` trait the lookup worker drives, and the
//! discriminated outcome every source returns.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::place::Place;

mod http;

pub use http::{HttpPlaceSource, classify_response};

/// A completed lookup that the endpoint answered meaningfully
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Matching places, in the order the endpoint ranked them
    Places(Vec<Place>),
    /// Valid query with zero matches
    NotFound,
    /// The endpoint rejected the query text as too short or malformed
    Malformed,
}

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Non-success status other than 400/404
    #[error("Upstream error: HTTP {status}")]
    Upstream { status: u16 },

    /// Connection, DNS, or timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Success status but the body was not a list of places
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Request was cancelled because a newer one superseded it
    #[error("Request cancelled")]
    Cancelled,
}

pub type LookupResult = Result<LookupOutcome, LookupError>;

/// Something that can resolve a query into candidate places
pub trait PlaceSource: Send + Sync {
    /// Look up at most `count` places matching `query`
    fn lookup<'a>(&'a self, query: &'a str, count: usize) -> BoxFuture<'a, LookupResult>;
}
