//! halbot-solr
//!
//! Blocking HTTP client for Solr-style `select` endpoints. See `client` for
//! the request side and `response` for the JSON shape it expects.
pub mod client;
pub mod response;

pub use client::SolrClient;
