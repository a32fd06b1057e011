//! A Rust library for fetching municipal demographics from the U.S. Census
//! API and narrowing them down by population.

pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod regions;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{CensusConfig, QueryMode};
pub use error::{CensusError, Result, RowError};
pub use fetch::{CensusFetcher, CensusQuery, CensusTransport, HttpTransport};
pub use regions::{CountyTable, StateRegion};

// Records
pub use models::{
    CensusVariable, DemographicRecord, DemographicTable, FilteredRecord, MergePolicy,
    ResponseGrid,
};

// Filtering capabilities
pub use filter::{FilterCriteria, PopulationRange, filter_and_sort};
