//! Query Executor
//!
//! Submits a query string to an endpoint, retrying failed attempts with the
//! backoff of a [`RetryPolicy`], and unwraps the successful response into its
//! ordered result rows.
//!
//! One invocation moves through
//! `PENDING -> {SUCCEEDED | RETRYING -> PENDING} -> SUCCEEDED | EXHAUSTED`.
//! Exhaustion surfaces as [`Error::Retrieval`] with the query attached; no
//! partial result is ever returned.

use crate::endpoint::{ResultRow, SparqlEndpoint};
use crate::error::{Error, Result};
use crate::execution::RetryPolicy;

pub struct QueryExecutor<E> {
    endpoint: E,
    policy: RetryPolicy,
}

impl<E: SparqlEndpoint> QueryExecutor<E> {
    /// Creates an executor with the default policy (5 attempts, 1 s base delay).
    pub fn new(endpoint: E) -> Self {
        Self::with_policy(endpoint, RetryPolicy::default())
    }

    pub fn with_policy(endpoint: E, policy: RetryPolicy) -> Self {
        Self { endpoint, policy }
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs `query` until one attempt succeeds or the policy is exhausted.
    ///
    /// An empty result set is a success.
    pub async fn execute(&self, query: &str) -> Result<Vec<ResultRow>> {
        let max_attempts = self.policy.max_attempts();
        let mut attempts = 0;

        loop {
            match self.endpoint.select(query).await {
                Ok(response) => {
                    let rows = response.into_rows();
                    tracing::info!(
                        rows = rows.len(),
                        attempts = attempts + 1,
                        "Query successful: {} entries retrieved",
                        rows.len()
                    );
                    return Ok(rows);
                }
                Err(error) => {
                    attempts += 1;
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts,
                        error = %error,
                        "Query attempt failed"
                    );

                    if attempts >= max_attempts {
                        tracing::error!(attempts, "Giving up on query");
                        return Err(Error::Retrieval {
                            query: query.to_string(),
                            attempts,
                            source: error,
                        });
                    }

                    let delay = self.policy.delay_after(attempts);
                    tracing::debug!(delay_ms = delay.as_millis() as u64, "Retrying query");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
