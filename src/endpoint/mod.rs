//! SPARQL endpoints.
//!
//! [`SparqlEndpoint`] is the seam between query execution and whatever
//! actually answers the query. The response types mirror the SPARQL 1.1 Query
//! Results JSON format, which is what Wikidata returns.

pub mod http;
pub mod local;

pub use http::HttpSparqlEndpoint;
pub use local::LocalSparqlEndpoint;

use crate::error::EndpointError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;

/// Something that can answer a SPARQL `SELECT` query.
///
/// One call is one attempt. Implementations do not retry; that is left to
/// [`QueryExecutor`](crate::execution::QueryExecutor).
pub trait SparqlEndpoint {
    fn select(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SparqlResponse, EndpointError>> + Send;
}

/// A SPARQL JSON results document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub head: Head,
    pub results: Results,
}

impl SparqlResponse {
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        Self { head: Head::default(), results: Results { bindings: rows } }
    }

    /// Unwraps the envelope into the ordered result rows.
    pub fn into_rows(self) -> Vec<ResultRow> {
        self.results.bindings
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub bindings: Vec<ResultRow>,
}

/// One solution: variable name to bound value. Unbound variables are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow(HashMap<String, Binding>);

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, variable: impl Into<String>, binding: Binding) -> Self {
        self.0.insert(variable.into(), binding);
        self
    }

    pub fn get(&self, variable: &str) -> Option<&Binding> {
        self.0.get(variable)
    }

    /// The literal string bound to `variable`.
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(|binding| binding.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Binding)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (String, Binding)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A bound RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// `uri`, `literal` or `bnode`
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Binding {
    pub fn uri(value: impl Into<String>) -> Self {
        Self { kind: "uri".to_string(), value: value.into(), lang: None, datatype: None }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self { kind: "literal".to_string(), value: value.into(), lang: None, datatype: None }
    }

    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            kind: "literal".to_string(),
            value: value.into(),
            lang: Some(lang.into()),
            datatype: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wikidata_response() {
        let body = r#"{
            "head": {"vars": ["item", "itemLabel"]},
            "results": {"bindings": [
                {
                    "item": {"type": "uri", "value": "http://www.wikidata.org/entity/Q142"},
                    "itemLabel": {"xml:lang": "en", "type": "literal", "value": "France"}
                },
                {
                    "item": {"type": "uri", "value": "http://www.wikidata.org/entity/Q183"}
                }
            ]}
        }"#;

        let response: SparqlResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.head.vars, vec!["item", "itemLabel"]);

        let rows = response.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("itemLabel"), Some("France"));
        assert_eq!(rows[0].get("itemLabel").and_then(|b| b.lang.as_deref()), Some("en"));
        assert_eq!(rows[1].value("itemLabel"), None);
        assert_eq!(rows[1].value("item"), Some("http://www.wikidata.org/entity/Q183"));
    }

    #[test]
    fn test_decode_empty_bindings() {
        let response: SparqlResponse =
            serde_json::from_str(r#"{"head": {"vars": []}, "results": {"bindings": []}}"#).unwrap();
        assert!(response.into_rows().is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_results() {
        let result = serde_json::from_str::<SparqlResponse>(r#"{"head": {"vars": []}}"#);
        assert!(result.is_err());
    }
}
