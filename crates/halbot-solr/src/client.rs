use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use halbot_core::config::HttpSettings;
use halbot_core::error::{Error, Result};
use halbot_core::traits::SearchBackend;
use halbot_core::types::SearchResult;

use crate::response::decode;

const SELECT_PATH: &str = "select";
const RESPONSE_FORMAT: &str = "json";

pub struct SolrClient {
    http: Client,
}

impl SolrClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("halbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("HTTP client: {e}")))?;
        Ok(Self { http })
    }

    pub fn from_settings(settings: &HttpSettings) -> Result<Self> {
        Self::new(Duration::from_secs(settings.timeout_secs))
    }

    /// Use a preconfigured client (proxy, TLS roots, ...).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

/// `<base>/select?wt=json&q=<query>`. The query is only URL-encoded; its
/// syntax belongs to the backend.
pub fn select_url(base_endpoint: &str, query: &str) -> Result<Url> {
    let link = format!("{}/{}", base_endpoint.trim_end_matches('/'), SELECT_PATH);
    let mut url = Url::parse(&link).map_err(|e| Error::Network(format!("bad endpoint {base_endpoint:?}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("wt", RESPONSE_FORMAT)
        .append_pair("q", query);
    Ok(url)
}

impl SearchBackend for SolrClient {
    fn search(&self, base_endpoint: &str, query: &str) -> Result<SearchResult> {
        let url = select_url(base_endpoint, query)?;
        debug!(%url, "querying search backend");
        let response = self
            .http
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .map_err(|e| Error::Network(format!("{url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("{url}: HTTP {status}")));
        }
        let body = response.text().map_err(|e| Error::Network(format!("{url}: {e}")))?;
        let result = decode(&body)?;
        debug!(total_found = result.total_found, returned = result.documents.len(), "search complete");
        Ok(result)
    }
}
