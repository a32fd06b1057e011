//! Configuration for `CensusFetcher`.

use std::fmt;
use std::time::Duration;

use crate::error::{CensusError, Result};
use crate::models::MergePolicy;
use crate::regions::{CountyTable, StateRegion};

/// Placeholder shipped in place of a real API key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

/// 2020 Decennial Census redistricting data endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.census.gov/data/2020/dec/pl";

/// Per-request deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// How requests are scoped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// One request for every place/county part in the state, filtered
    /// locally down to the target counties
    #[default]
    StateWide,
    /// One request per target county
    PerCounty,
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateWide => write!(f, "state-wide"),
            Self::PerCounty => write!(f, "per-county"),
        }
    }
}

/// Configuration for the `CensusFetcher`
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Census API access key
    pub api_key: String,
    /// Dataset endpoint
    pub endpoint: String,
    /// State every query is scoped to
    pub state: StateRegion,
    /// County name to FIPS lookup
    pub counties: CountyTable,
    /// Request scoping strategy
    pub mode: QueryMode,
    /// Deadline for a single request
    pub timeout: Duration,
    /// Handling of duplicate place names
    pub merge_policy: MergePolicy,
    /// Draw a progress bar while fetching county by county
    pub show_progress: bool,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            api_key: API_KEY_PLACEHOLDER.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state: StateRegion::ohio(),
            counties: CountyTable::ohio(),
            mode: QueryMode::default(),
            timeout: DEFAULT_TIMEOUT,
            merge_policy: MergePolicy::default(),
            show_progress: true,
        }
    }
}

impl CensusConfig {
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_region(mut self, state: StateRegion, counties: CountyTable) -> Self {
        self.state = state;
        self.counties = counties;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check that the configuration is usable before any request is made
    pub fn validate(&self) -> Result<()> {
        let key = self.api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            return Err(CensusError::configuration(
                "Census API key is not set. Please add it to the configuration.",
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(CensusError::configuration("Census API endpoint is empty"));
        }
        Ok(())
    }
}

impl fmt::Display for CensusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Census Configuration:")?;
        writeln!(f, "  Endpoint: {}", self.endpoint)?;
        writeln!(f, "  State: {}", self.state)?;
        writeln!(f, "  Known Counties: {}", self.counties.len())?;
        writeln!(f, "  Query Mode: {}", self.mode)?;
        writeln!(f, "  Timeout: {:?}", self.timeout)?;
        writeln!(f, "  Merge Policy: {}", self.merge_policy)?;
        let key_state = if self.validate().is_ok() { "set" } else { "missing" };
        writeln!(f, "  API Key: <{key_state}>")?;
        Ok(())
    }
}
