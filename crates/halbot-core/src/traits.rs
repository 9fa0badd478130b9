use crate::error::Result;
use crate::types::SearchResult;

/// A full-text search backend reachable through a base endpoint.
///
/// Calls block until the complete result is decoded; there is no partial
/// output and no retry.
pub trait SearchBackend: Send + Sync {
    fn search(&self, base_endpoint: &str, query: &str) -> Result<SearchResult>;
}

impl<T: SearchBackend + ?Sized> SearchBackend for std::sync::Arc<T> {
    fn search(&self, base_endpoint: &str, query: &str) -> Result<SearchResult> {
        (**self).search(base_endpoint, query)
    }
}
