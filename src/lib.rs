//! # Wikifacts
//!
//! Wikifacts retrieves structured facts from a public knowledge-graph SPARQL
//! endpoint: sovereign states, the continents they belong to, and the large
//! cities located in each of them.
//!
//! Queries are composed from a small vocabulary of named items and properties
//! that resolve to opaque Wikidata identifiers, then executed with bounded
//! retry and quadratic backoff.
//!
//! ## Features
//!
//! - Typed vocabulary with an explicit, immutable resolution table
//! - Clause-based query builders rendering in a fixed order
//! - Retrying query executor over any [`endpoint::SparqlEndpoint`]
//! - HTTP endpoint (SPARQL 1.1 protocol) and a local Oxigraph endpoint
//!
//! ## Example
//!
//! ```rust
//! use wikifacts::query::StandardQuery;
//! use wikifacts::vocabulary::{Item, Property, Vocabulary};
//!
//! fn example() -> wikifacts::Result<String> {
//!     let vocabulary = Vocabulary::wikidata();
//!     StandardQuery::new(Item::SovereignState, Property::Continent)
//!         .limit(10)
//!         .build(&vocabulary)
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

/// Item and property kinds and their identifier table
pub mod vocabulary;

/// Query builders for the standard and country-cities query shapes
pub mod query;

/// SPARQL endpoints: the client seam, HTTP and local implementations
pub mod endpoint;

/// Query execution with bounded retry
pub mod execution;

/// Country and city retrieval on top of the executor
pub mod harvest;

/// Runtime configuration values
pub mod config;

/// Log filter and report formatting for the binary
pub mod output;

pub mod error {
    //! Error types and result definitions

    use crate::vocabulary::VocabularyKind;
    use thiserror::Error;

    /// Result type alias for Wikifacts operations
    pub type Result<T> = std::result::Result<T, Error>;

    /// Main error type for Wikifacts
    #[derive(Error, Debug)]
    pub enum Error {
        /// A vocabulary name is unknown, or the table has no identifier for it
        #[error("Unknown {kind}: {key}")]
        Lookup { kind: VocabularyKind, key: String },

        /// A clause could not be rendered
        #[error("Format error: {0}")]
        Format(String),

        /// Every attempt to run the query failed
        #[error("Unable to retrieve data after {attempts} attempts using this query: {query}")]
        Retrieval {
            query: String,
            attempts: u32,
            #[source]
            source: EndpointError,
        },

        /// Configuration error
        #[error("Configuration error: {0}")]
        Config(String),

        /// IO error
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// Failure of a single endpoint round-trip. The executor retries these.
    #[derive(Error, Debug)]
    pub enum EndpointError {
        /// HTTP request failed
        #[error("HTTP request failed: {0}")]
        Request(#[from] reqwest::Error),

        /// The endpoint answered with a non-success status
        #[error("Query failed with status {status}: {body}")]
        Status { status: reqwest::StatusCode, body: String },

        /// The response body is not a SPARQL JSON results document
        #[error("Failed to decode SPARQL results: {0}")]
        Decode(#[from] serde_json::Error),

        /// The local store rejected or failed the query
        #[error("Store error: {0}")]
        Store(String),
    }
}

// Re-export commonly used types
pub use error::{EndpointError, Error, Result};
