//! Oxigraph-backed endpoint over an in-memory store.
//!
//! Answers the same queries as the Wikidata service from a local Turtle dump,
//! which makes offline runs and end-to-end tests possible. Queries get the
//! `wd:`, `wdt:` and `rdfs:` prefixes predeclared, as the Wikidata service does.
//!
//! # Example
//!
//! ```ignore
//! use wikifacts::endpoint::{LocalSparqlEndpoint, SparqlEndpoint};
//!
//! let endpoint = LocalSparqlEndpoint::from_turtle(r#"
//!     @prefix wd: <http://www.wikidata.org/entity/> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     wd:Q142 rdfs:label "France"@en .
//! "#)?;
//!
//! let response = endpoint.select("SELECT ?label WHERE { wd:Q142 rdfs:label ?label }").await?;
//! assert_eq!(response.into_rows()[0].value("label"), Some("France"));
//! ```

use oxigraph::io::RdfFormat;
use oxigraph::model::vocab::xsd;
use oxigraph::model::Term;
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;
use std::path::Path;

use super::{Binding, Head, ResultRow, Results, SparqlEndpoint, SparqlResponse};
use crate::error::{EndpointError, Error, Result};

const WIKIDATA_PREFIXES: &str = "PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
";

impl From<oxigraph::store::StorageError> for EndpointError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        EndpointError::Store(err.to_string())
    }
}

impl From<oxigraph::sparql::QueryEvaluationError> for EndpointError {
    fn from(err: oxigraph::sparql::QueryEvaluationError) -> Self {
        EndpointError::Store(err.to_string())
    }
}

pub struct LocalSparqlEndpoint {
    store: Store,
}

impl LocalSparqlEndpoint {
    /// Creates an endpoint over the triples of a Turtle document.
    pub fn from_turtle(data: &str) -> Result<Self> {
        let store =
            Store::new().map_err(|e| Error::Config(format!("failed to create store: {}", e)))?;
        store
            .load_from_reader(RdfFormat::Turtle, data.as_bytes())
            .map_err(|e| Error::Config(format!("failed to load Turtle data: {}", e)))?;
        Ok(Self { store })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_turtle(&data)
    }

    /// Number of triples in the store.
    pub fn len(&self) -> Result<usize> {
        self.store.len().map_err(|e| Error::Config(e.to_string()))
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty().map_err(|e| Error::Config(e.to_string()))
    }
}

impl SparqlEndpoint for LocalSparqlEndpoint {
    async fn select(&self, query: &str) -> std::result::Result<SparqlResponse, EndpointError> {
        let query = format!("{}{}", WIKIDATA_PREFIXES, query);

        let evaluator = SparqlEvaluator::new();
        let parsed_query =
            evaluator.parse_query(&query).map_err(|e| EndpointError::Store(e.to_string()))?;
        let results = parsed_query.on_store(&self.store).execute()?;

        // Only SELECT queries produce solutions
        let QueryResults::Solutions(solutions) = results else {
            return Err(EndpointError::Store("only SELECT queries are supported".to_string()));
        };

        let vars = solutions.variables().iter().map(|var| var.as_str().to_string()).collect();
        let mut bindings = Vec::new();
        for solution in solutions {
            let solution = solution?;
            let row: ResultRow = solution
                .iter()
                .map(|(var, term)| (var.as_str().to_string(), binding_from_term(term)))
                .collect();
            bindings.push(row);
        }

        Ok(SparqlResponse { head: Head { vars }, results: Results { bindings } })
    }
}

fn binding_from_term(term: &Term) -> Binding {
    match term {
        Term::NamedNode(node) => Binding::uri(node.as_str()),
        Term::BlankNode(node) => Binding {
            kind: "bnode".to_string(),
            value: node.as_str().to_string(),
            lang: None,
            datatype: None,
        },
        Term::Literal(literal) => match literal.language() {
            Some(lang) => Binding::lang_literal(literal.value(), lang),
            None => {
                let datatype = literal.datatype();
                Binding {
                    kind: "literal".to_string(),
                    value: literal.value().to_string(),
                    lang: None,
                    datatype: (datatype != xsd::STRING).then(|| datatype.as_str().to_string()),
                }
            }
        },
    }
}
