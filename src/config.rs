use crate::error::{Error, Result};
use crate::query::{self, DEFAULT_LANGUAGE};

/// Public Wikidata Query Service endpoint.
pub const WIKIDATA_SPARQL_URL: &str = "https://query.wikidata.org/sparql";

#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub url: String,
    /// Sent with every request; the Wikidata service rejects anonymous clients
    pub user_agent: String,
    /// Client-side timeout for a single request
    pub timeout_secs: u64,
    /// Honour the HTTP(S)_PROXY environment variables
    pub use_system_proxy: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: WIKIDATA_SPARQL_URL.to_string(),
            user_agent: format!("wikifacts/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 60,
            use_system_proxy: true,
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(Error::Config(format!("endpoint URL must be http(s): {}", self.url)));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("user agent must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout must be at least one second".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Language of every label requested
    pub language: String,
    /// Row limit of the country query
    pub country_limit: Option<i64>,
    /// City queries allowed in flight at once
    pub concurrency: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self { language: DEFAULT_LANGUAGE.to_string(), country_limit: None, concurrency: 1 }
    }
}

impl HarvestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        query::validate_language(&self.language)
            .map_err(|_| Error::Config(format!("invalid label language: {}", self.language)))
    }
}
