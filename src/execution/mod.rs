//! Query Execution Module
//!
//! Runs query strings against a [`SparqlEndpoint`](crate::endpoint::SparqlEndpoint)
//! with bounded retry.
//!
//! # Components
//!
//! - [`RetryPolicy`]: attempt bound and quadratic backoff schedule
//! - [`QueryExecutor`]: retry loop and result unwrapping
//!
//! # Example
//!
//! ```ignore
//! use wikifacts::endpoint::HttpSparqlEndpoint;
//! use wikifacts::execution::QueryExecutor;
//!
//! let executor = QueryExecutor::new(HttpSparqlEndpoint::new(Default::default())?);
//! let rows = executor.execute("SELECT ?s WHERE { ?s ?p ?o } LIMIT 1").await?;
//! ```

pub mod executor;
pub mod retry;

pub use executor::QueryExecutor;
pub use retry::RetryPolicy;
