//! Domain types shared by the search client and the formatter.

use serde::{Deserialize, Serialize};

/// A single search hit as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub source_id: String,
}

impl Document {
    pub fn new(title: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self { title: title.into(), source_id: source_id.into() }
    }
}

/// One page of results for a query.
///
/// - `total_found`: number of matching documents across the whole index
/// - `documents`: the page the backend returned, usually a prefix of the
///   full result set, so `documents.len()` may be smaller than `total_found`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_found: u64,
    pub documents: Vec<Document>,
}
