//! Population filtering and ordering
//!
//! This module narrows a [`DemographicTable`] down to places inside a
//! population range and orders them largest first.

use itertools::Itertools;
use std::cmp::Reverse;
use std::fmt;

use crate::models::{DemographicRecord, DemographicTable, FilteredRecord};

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// Inclusive population bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulationRange {
    /// Minimum population (inclusive)
    pub min: u64,
    /// Maximum population (inclusive); `None` means unbounded
    pub max: Option<u64>,
}

impl PopulationRange {
    #[must_use]
    pub const fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Range with only a lower bound
    #[must_use]
    pub const fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    #[must_use]
    pub const fn contains(&self, population: u64) -> bool {
        if population < self.min {
            return false;
        }
        match self.max {
            Some(max) => population <= max,
            None => true,
        }
    }
}

impl FilterCriteria<DemographicRecord> for PopulationRange {
    fn meets_criteria(&self, record: &DemographicRecord) -> bool {
        self.contains(record.population)
    }
}

impl fmt::Display for PopulationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}

/// Filter places by a criterion and sort them by population, largest first
///
/// Entries with equal populations keep the table's insertion order. The
/// table is left untouched.
#[must_use]
pub fn filter_and_sort<F>(table: &DemographicTable, criteria: &F) -> Vec<FilteredRecord>
where
    F: FilterCriteria<DemographicRecord>,
{
    table
        .iter()
        .filter(|(_, record)| criteria.meets_criteria(record))
        .map(|(name, record)| FilteredRecord::new(name, record.clone()))
        .sorted_by_key(|town| Reverse(town.population()))
        .collect()
}
