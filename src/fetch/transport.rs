//! Transport layer between the fetcher and the census endpoint

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::{CensusError, Result};
use crate::fetch::query::CensusQuery;
use crate::models::ResponseGrid;

/// Executes one census query and returns its decoded grid
///
/// Every failure (network, status, body) is reported as
/// [`CensusError::Fetch`] scoped to the query.
pub trait CensusTransport {
    fn execute(&self, endpoint: &str, query: &CensusQuery) -> Result<ResponseGrid>;
}

/// Blocking HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests fail after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CensusError::configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl CensusTransport for HttpTransport {
    fn execute(&self, endpoint: &str, query: &CensusQuery) -> Result<ResponseGrid> {
        let scope = query.scope();

        let response = self
            .client
            .get(endpoint)
            .query(query.params())
            .send()
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else {
                    format!("request failed: {e}")
                };
                CensusError::fetch(scope, reason)
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| CensusError::fetch(scope, format!("failed to read response body: {e}")))?;

        decode_response(scope, status, body)
    }
}

/// Map a completed response to a grid
///
/// Non-success statuses and undecodable bodies keep the raw body on the
/// error. A success with an empty body is an empty grid.
pub fn decode_response(scope: &str, status: StatusCode, body: String) -> Result<ResponseGrid> {
    if !status.is_success() {
        return Err(CensusError::fetch(scope, format!("HTTP status {status}")).with_body(body));
    }

    ResponseGrid::parse(&body).map_err(|e| CensusError::fetch(scope, e.to_string()).with_body(body))
}
