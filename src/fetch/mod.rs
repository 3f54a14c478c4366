//! Item data source abstraction.
//!
//! The panel never talks to a concrete backend. It asks an [`ItemSource`]
//! for the items matching the current input and awaits the boxed future.

mod canned;

pub use canned::{canned_items, CannedSource, DEFAULT_CANNED_DELAY};

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// One entry of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Errors an item source may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source refused the query.
    #[error("query '{query}' rejected: {reason}")]
    Rejected { query: String, reason: String },

    /// The source could not be reached at all.
    #[error("item source unavailable: {0}")]
    Unavailable(String),
}

/// Future returned by [`ItemSource::fetch_items`].
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<Item>, FetchError>> + Send>>;

/// Asynchronous provider of items for a query.
///
/// The returned future must not borrow from `self` or `query`; clone what
/// the request needs before boxing it. Sources have no timeout contract, a
/// future that never resolves keeps the panel loading.
pub trait ItemSource: Send + Sync {
    fn fetch_items(&self, query: &str) -> FetchFuture;
}

