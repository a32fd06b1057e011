//! Domain models for census demographics
//!
//! These types carry data from the raw API grid through typed rows into
//! the per-place records that get filtered and printed.

pub mod collections;
pub mod grid;
pub mod record;
pub mod variables;

// Re-export commonly used types
pub use collections::{DemographicTable, InsertOutcome, MergePolicy};
pub use grid::{CensusRow, ColumnIndex, ResponseGrid};
pub use record::{DemographicRecord, FilteredRecord, SubgroupCounts};
pub use variables::CensusVariable;
