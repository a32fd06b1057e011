//! Census data fetching
//!
//! [`CensusFetcher`] turns a list of county names into a
//! [`DemographicTable`] of places. Requests go through a
//! [`CensusTransport`], which is the reqwest-backed [`HttpTransport`]
//! unless another one is injected.
//!
//! A failed request never aborts the fetch: it is logged and the records
//! gathered so far are returned. Only configuration problems are raised.

pub mod query;
pub mod transport;

use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::time::Instant;

use crate::config::{CensusConfig, QueryMode};
use crate::error::{CensusError, Result, RowError};
use crate::models::{
    CensusRow, ColumnIndex, DemographicRecord, DemographicTable, InsertOutcome, ResponseGrid,
};
use crate::utils::logging::{
    create_main_progress_bar, create_spinner, finish_progress_bar, log_fetch_complete, log_fetch_error,
    log_fetch_start,
};

pub use query::CensusQuery;
pub use transport::{CensusTransport, HttpTransport};

/// A county name resolved to its FIPS code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCounty {
    pub name: String,
    pub fips: String,
}

/// Row tallies for one ingested response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows in the response
    pub rows: usize,
    /// Rows that became new table entries
    pub inserted: usize,
    /// Rows outside the target counties
    pub outside_target: usize,
    /// Rows with zero population
    pub unpopulated: usize,
    /// Rows that failed to decode
    pub invalid: usize,
    /// Rows whose place name was already present
    pub duplicates: usize,
}

/// Local county filter for responses that span the whole state
struct CountyFilter<'a> {
    /// Response column holding the county FIPS code
    column: &'a str,
    fips: &'a FxHashSet<&'a str>,
}

/// Fetches municipal demographics for a set of counties
#[derive(Debug)]
pub struct CensusFetcher<T = HttpTransport> {
    config: CensusConfig,
    transport: T,
}

impl CensusFetcher<HttpTransport> {
    /// Create a fetcher that talks to the census endpoint over HTTP
    pub fn new(config: CensusConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: CensusTransport> CensusFetcher<T> {
    /// Create a fetcher with a custom transport
    pub fn with_transport(config: CensusConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch population and diversity data for every place in the given counties
    ///
    /// Unknown county names are skipped with a warning. The configuration is
    /// validated before any request is made; an unusable credential is the
    /// only error this returns.
    pub fn fetch<S: AsRef<str>>(&self, county_names: &[S]) -> Result<DemographicTable> {
        self.config.validate()?;

        let targets = self.resolve_counties(county_names);
        let mut table = DemographicTable::with_policy(self.config.merge_policy);
        if targets.is_empty() {
            warn!("No known counties to search, nothing to fetch");
            return Ok(table);
        }

        info!(
            "Fetching demographic data from the U.S. Census Bureau ({} mode, {} counties)...",
            self.config.mode,
            targets.len()
        );
        let start = Instant::now();

        match self.config.mode {
            QueryMode::StateWide => self.fetch_state_wide(&targets, &mut table),
            QueryMode::PerCounty => self.fetch_per_county(&targets, &mut table),
        }

        log_fetch_complete(&self.config.state.name, table.len(), Some(start.elapsed()));
        Ok(table)
    }

    /// Resolve county names through the configured table
    ///
    /// Unknown names are logged and skipped; repeated names resolve once.
    pub fn resolve_counties<S: AsRef<str>>(&self, county_names: &[S]) -> Vec<ResolvedCounty> {
        let mut resolved: Vec<ResolvedCounty> = Vec::with_capacity(county_names.len());
        for name in county_names {
            let name = name.as_ref();
            match self.config.counties.resolve(name) {
                Some(fips) => {
                    if resolved.iter().all(|county| county.fips != fips) {
                        resolved.push(ResolvedCounty {
                            name: name.to_string(),
                            fips: fips.to_string(),
                        });
                    }
                }
                None => warn!("County '{name}' not found. Skipping."),
            }
        }
        resolved
    }

    fn fetch_state_wide(&self, targets: &[ResolvedCounty], table: &mut DemographicTable) {
        // The API cannot select an arbitrary set of counties, so the whole
        // state is requested and rows are filtered here.
        let target_fips: FxHashSet<&str> = targets.iter().map(|c| c.fips.as_str()).collect();
        let query = CensusQuery::state_wide(&self.config);
        log_fetch_start(query.scope(), &query);

        let spinner = self
            .config
            .show_progress
            .then(|| create_spinner(Some(query.scope())));
        let response = self.transport.execute(&self.config.endpoint, &query);
        if let Some(spinner) = &spinner {
            finish_progress_bar(spinner, None);
        }

        let filter = query.county_column().map(|column| CountyFilter {
            column,
            fips: &target_fips,
        });
        match response {
            Ok(grid) => {
                let stats = self.ingest(query.scope(), &grid, filter.as_ref(), table);
                debug!("{}: {stats:?}", query.scope());
            }
            Err(e) => log_fetch_error(&e),
        }
    }

    fn fetch_per_county(&self, targets: &[ResolvedCounty], table: &mut DemographicTable) {
        let pb = if self.config.show_progress {
            create_main_progress_bar(targets.len() as u64, Some("Fetching counties"))
        } else {
            indicatif::ProgressBar::hidden()
        };

        for county in targets {
            let query = CensusQuery::per_county(&self.config, &county.name, &county.fips);
            pb.set_message(format!("{} County", county.name));
            log_fetch_start(query.scope(), &query);

            match self.transport.execute(&self.config.endpoint, &query) {
                Ok(grid) => {
                    let stats = self.ingest(query.scope(), &grid, None, table);
                    debug!("{}: {stats:?}", query.scope());
                }
                Err(e) => log_fetch_error(&e),
            }
            pb.inc(1);
        }

        finish_progress_bar(&pb, Some("Done"));
    }

    /// Turn a response grid into table entries
    ///
    /// With a county filter, rows whose county column is not one of the
    /// targets are discarded before any record is built.
    fn ingest(
        &self,
        scope: &str,
        grid: &ResponseGrid,
        filter: Option<&CountyFilter<'_>>,
        table: &mut DemographicTable,
    ) -> IngestStats {
        let mut stats = IngestStats {
            rows: grid.len(),
            ..IngestStats::default()
        };
        if grid.is_empty() {
            return stats;
        }

        let index = match ColumnIndex::resolve(&grid.headers, filter.map(|f| f.column)) {
            Ok(index) => index,
            Err(e) => {
                log_fetch_error(&CensusError::fetch(scope, e.to_string()));
                stats.invalid = grid.len();
                return stats;
            }
        };

        for (line, raw) in grid.rows.iter().enumerate() {
            let row = match CensusRow::decode(&index, &grid.headers, raw) {
                Ok(row) => row,
                Err(e) => {
                    log_row_error(line + 1, &e);
                    stats.invalid += 1;
                    continue;
                }
            };

            if let Some(filter) = filter {
                let in_target = row
                    .county
                    .as_deref()
                    .is_some_and(|fips| filter.fips.contains(fips));
                if !in_target {
                    stats.outside_target += 1;
                    continue;
                }
            }

            let Some(record) = DemographicRecord::from_counts(row.total, &row.counts) else {
                stats.unpopulated += 1;
                continue;
            };

            let name = self.config.state.clean_place_name(&row.name);
            match table.insert(name.as_str(), record) {
                InsertOutcome::Inserted => stats.inserted += 1,
                InsertOutcome::Replaced | InsertOutcome::Discarded => {
                    debug!("Duplicate place '{name}' resolved {}", table.policy());
                    stats.duplicates += 1;
                }
            }
        }

        stats
    }
}

fn log_row_error(line: usize, error: &RowError) {
    warn!("Skipping response row {line}: {error}");
}
