//! Collection of demographic records keyed by place name
//!
//! The table remembers insertion order, so later stable sorts keep the
//! order in which the API returned places.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::models::record::DemographicRecord;

/// What to do when a place name is inserted a second time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Keep the record that arrived first, discard later duplicates
    #[default]
    FirstSeenWins,
    /// Replace the stored record, keeping its original position
    LastSeenWins,
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSeenWins => write!(f, "first-seen-wins"),
            Self::LastSeenWins => write!(f, "last-seen-wins"),
        }
    }
}

/// Result of inserting into a [`DemographicTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The name was new
    Inserted,
    /// The name existed and the new record replaced it
    Replaced,
    /// The name existed and the new record was dropped
    Discarded,
}

/// Insertion-ordered mapping from place name to demographic record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemographicTable {
    entries: Vec<(String, DemographicRecord)>,
    index: FxHashMap<String, usize>,
    policy: MergePolicy,
}

impl DemographicTable {
    /// Create a new empty table with the default merge policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty table with the given merge policy
    #[must_use]
    pub fn with_policy(policy: MergePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Insert a record, resolving duplicate names through the merge policy
    pub fn insert(&mut self, name: impl Into<String>, record: DemographicRecord) -> InsertOutcome {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => match self.policy {
                MergePolicy::FirstSeenWins => InsertOutcome::Discarded,
                MergePolicy::LastSeenWins => {
                    self.entries[pos].1 = record;
                    InsertOutcome::Replaced
                }
            },
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, record));
                InsertOutcome::Inserted
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DemographicRecord> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DemographicRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Place names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<N: Into<String>> FromIterator<(N, DemographicRecord)> for DemographicTable {
    fn from_iter<I: IntoIterator<Item = (N, DemographicRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, record) in iter {
            table.insert(name, record);
        }
        table
    }
}
