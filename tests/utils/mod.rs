use std::cell::RefCell;
use std::collections::VecDeque;

use census_towns::{
    CensusConfig, CensusError, CensusFetcher, CensusQuery, CensusTransport, CountyTable,
    QueryMode, ResponseGrid, Result,
};

/// Key accepted by configuration validation
pub const TEST_API_KEY: &str = "test-api-key";

/// One place row as the census API would return it
#[derive(Debug, Clone)]
pub struct PlaceRow {
    pub name: &'static str,
    pub county: &'static str,
    pub total: u64,
    pub counts: [u64; 8],
}

impl PlaceRow {
    #[must_use]
    pub const fn new(name: &'static str, county: &'static str, total: u64, counts: [u64; 8]) -> Self {
        Self {
            name,
            county,
            total,
            counts,
        }
    }

    /// Row where every resident is counted as white non-hispanic
    #[must_use]
    pub const fn uniform(name: &'static str, county: &'static str, total: u64) -> Self {
        Self::new(name, county, total, [0, total, 0, 0, 0, 0, 0, 0])
    }

    /// `NAME` of this place's part in its county, as the state-wide query
    /// reports it: `"Franklin County (part), Dublin city, Ohio"`
    #[must_use]
    pub fn part_name(&self) -> String {
        let table = CountyTable::ohio();
        let county = table.name_of(self.county).unwrap_or(self.county);
        format!("{county} County (part), {}", self.name)
    }

    fn cells(&self, name: String, county: bool) -> Vec<Option<String>> {
        let mut cells = vec![Some(name), Some(self.total.to_string())];
        cells.extend(self.counts.iter().map(|c| Some(c.to_string())));
        cells.push(Some("39".to_string()));
        cells.push(Some("00000".to_string()));
        if county {
            cells.push(Some(self.county.to_string()));
        }
        cells
    }
}

/// Header row of a census response, optionally ending in a county column
#[must_use]
pub fn headers(county_column: Option<&str>) -> Vec<String> {
    let mut headers: Vec<String> = [
        "NAME", "P2_001N", "P2_002N", "P2_005N", "P2_006N", "P2_007N", "P2_008N", "P2_009N",
        "P2_010N", "P2_011N", "state", "place",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if let Some(column) = county_column {
        headers.push(column.to_string());
    }
    headers
}

/// Grid as returned by the state-wide query: one row per place/county part,
/// with the county code under `county (or part)`
#[must_use]
pub fn state_wide_grid(rows: &[PlaceRow]) -> ResponseGrid {
    ResponseGrid::new(
        headers(Some("county (or part)")),
        rows.iter().map(|r| r.cells(r.part_name(), true)).collect(),
    )
}

/// Grid as returned by a single-county query
#[must_use]
pub fn county_grid(rows: &[PlaceRow]) -> ResponseGrid {
    ResponseGrid::new(
        headers(None),
        rows.iter().map(|r| r.cells(r.name.to_string(), false)).collect(),
    )
}

/// Get default test configuration
#[must_use]
pub fn test_config(mode: QueryMode) -> CensusConfig {
    CensusConfig::default()
        .with_api_key(TEST_API_KEY)
        .with_mode(mode)
        .with_progress(false)
}

/// Transport that replays canned responses and records every query
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Result<ResponseGrid>>>,
    calls: RefCell<Vec<CensusQuery>>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond(self, grid: ResponseGrid) -> Self {
        self.responses.borrow_mut().push_back(Ok(grid));
        self
    }

    #[must_use]
    pub fn fail(self, error: CensusError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<CensusQuery> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CensusTransport for StubTransport {
    fn execute(&self, _endpoint: &str, query: &CensusQuery) -> Result<ResponseGrid> {
        self.calls.borrow_mut().push(query.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ResponseGrid::default()))
    }
}

/// Fetcher over a stub transport
#[must_use]
pub fn stub_fetcher(config: CensusConfig, transport: StubTransport) -> CensusFetcher<StubTransport> {
    CensusFetcher::with_transport(config, transport)
}
