//! Alias to base-endpoint lookup for the configured search indices.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Maps a short alias (what users type) to a backend base endpoint.
///
/// Built once at startup and only read afterwards, so it can be shared
/// across concurrent dispatches behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct IndexRegistry {
    indices: BTreeMap<String, String>,
}

impl IndexRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();
        for (alias, endpoint) in &settings.solr {
            registry.register(alias.clone(), endpoint.clone());
        }
        registry
    }

    /// Later registrations of the same alias replace earlier ones.
    pub fn register(&mut self, alias: impl Into<String>, base_endpoint: impl Into<String>) {
        let alias = alias.into();
        let base_endpoint = base_endpoint.into();
        info!(%alias, %base_endpoint, "registering index");
        if let Some(previous) = self.indices.insert(alias.clone(), base_endpoint) {
            warn!(%alias, %previous, "index alias registered twice, keeping the latest");
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, alias: &str) -> Result<&str> {
        self.indices
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownAlias(alias.to_string()))
    }

    /// Registered aliases in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.indices.len() }

    pub fn is_empty(&self) -> bool { self.indices.is_empty() }
}

impl<A, E> FromIterator<(A, E)> for IndexRegistry
where
    A: Into<String>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, E)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (alias, endpoint) in iter {
            registry.register(alias, endpoint);
        }
        registry
    }
}
