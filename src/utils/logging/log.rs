//! Logging utilities
//!
//! This module provides standardized logging functions for census requests.

use std::fmt::Display;

use crate::error::{CensusError, body_excerpt};

/// Log a request start with consistent format
///
/// # Arguments
/// * `scope` - What the request covers, e.g. `Franklin County`
/// * `query` - Rendered query string; must already hide the credential
pub fn log_fetch_start(scope: &str, query: &impl Display) {
    log::info!("-> Searching in {scope}...");
    log::debug!("Request for {scope}: {query}");
}

/// Log a fetch completion with consistent format
///
/// # Arguments
/// * `region` - Region the records belong to
/// * `items` - Number of places collected
/// * `elapsed` - Optional elapsed time
pub fn log_fetch_complete(region: &str, items: usize, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully collected {items} places in {region} in {duration:?}");
    } else {
        log::info!("Successfully collected {items} places in {region}");
    }
}

/// Log a failed request, including the raw response body when one arrived
pub fn log_fetch_error(error: &CensusError) {
    match error {
        CensusError::Fetch { scope, reason, body } => {
            log::error!("Could not fetch data for {scope}. {reason}");
            if let Some(body) = body {
                log::error!("Response body: {}", body_excerpt(body));
            }
        }
        other => log::error!("{other}"),
    }
}

/// Log a warning with an optional subject
///
/// # Arguments
/// * `message` - Warning message
/// * `subject` - Optional name the warning is about
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{message}: {subject}");
    } else {
        log::warn!("{message}");
    }
}
