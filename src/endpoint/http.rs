//! HTTP client for remote SPARQL endpoints (Wikidata Query Service by default)

use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

use super::{SparqlEndpoint, SparqlResponse};
use crate::config::EndpointConfig;
use crate::error::{EndpointError, Error, Result};

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// SPARQL 1.1 protocol client. Queries are sent as a form-encoded `POST`.
#[derive(Debug, Clone)]
pub struct HttpSparqlEndpoint {
    config: EndpointConfig,
    client: Client,
}

impl HttpSparqlEndpoint {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl SparqlEndpoint for HttpSparqlEndpoint {
    async fn select(&self, query: &str) -> std::result::Result<SparqlResponse, EndpointError> {
        let response = self
            .client
            .post(&self.config.url)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EndpointError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_creation() {
        let endpoint = HttpSparqlEndpoint::new(EndpointConfig::default()).unwrap();
        assert_eq!(endpoint.url(), "https://query.wikidata.org/sparql");
    }

    #[test]
    fn test_endpoint_rejects_invalid_config() {
        let config =
            EndpointConfig { url: "query.wikidata.org/sparql".to_string(), ..Default::default() };
        assert!(matches!(HttpSparqlEndpoint::new(config), Err(Error::Config(_))));
    }
}
