//! Demographic records derived from census rows

use serde::{Deserialize, Serialize};

use crate::models::variables::{CensusVariable, SUBGROUP_COUNT};

/// Raw subgroup counts in [`CensusVariable::SUBGROUPS`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubgroupCounts(pub [u64; SUBGROUP_COUNT]);

impl SubgroupCounts {
    /// Count for one subgroup variable; `None` for the total
    #[must_use]
    pub fn get(&self, variable: CensusVariable) -> Option<u64> {
        CensusVariable::SUBGROUPS
            .iter()
            .position(|v| *v == variable)
            .map(|idx| self.0[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (CensusVariable, u64)> + '_ {
        CensusVariable::SUBGROUPS.iter().copied().zip(self.0.iter().copied())
    }
}

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `count` in `population` as a percentage rounded to 2 decimals
#[must_use]
pub fn percentage(count: u64, population: u64) -> f64 {
    round2((count as f64 / population as f64) * 100.0)
}

/// Population and subgroup percentages for one place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicRecord {
    pub population: u64,
    pub pct_hispanic: f64,
    pub pct_white_non_hispanic: f64,
    pub pct_black_non_hispanic: f64,
    pub pct_native_non_hispanic: f64,
    pub pct_asian_non_hispanic: f64,
    pub pct_pacific_islander_non_hispanic: f64,
    pub pct_other_non_hispanic: f64,
    pub pct_multiracial_non_hispanic: f64,
}

impl DemographicRecord {
    /// Build a record from a population total and its subgroup counts
    ///
    /// Returns `None` when `population` is zero: such places carry no
    /// meaningful breakdown and are dropped.
    #[must_use]
    pub fn from_counts(population: u64, counts: &SubgroupCounts) -> Option<Self> {
        if population == 0 {
            return None;
        }
        let [hispanic, white, black, native, asian, pacific, other, multiracial] =
            counts.0.map(|count| percentage(count, population));

        Some(Self {
            population,
            pct_hispanic: hispanic,
            pct_white_non_hispanic: white,
            pct_black_non_hispanic: black,
            pct_native_non_hispanic: native,
            pct_asian_non_hispanic: asian,
            pct_pacific_islander_non_hispanic: pacific,
            pct_other_non_hispanic: other,
            pct_multiracial_non_hispanic: multiracial,
        })
    }

    /// Percentage for a subgroup variable; `None` for the total
    #[must_use]
    pub fn percentage(&self, variable: CensusVariable) -> Option<f64> {
        let value = match variable {
            CensusVariable::TotalPopulation => return None,
            CensusVariable::Hispanic => self.pct_hispanic,
            CensusVariable::WhiteNonHispanic => self.pct_white_non_hispanic,
            CensusVariable::BlackNonHispanic => self.pct_black_non_hispanic,
            CensusVariable::NativeNonHispanic => self.pct_native_non_hispanic,
            CensusVariable::AsianNonHispanic => self.pct_asian_non_hispanic,
            CensusVariable::PacificIslanderNonHispanic => self.pct_pacific_islander_non_hispanic,
            CensusVariable::OtherNonHispanic => self.pct_other_non_hispanic,
            CensusVariable::MultiracialNonHispanic => self.pct_multiracial_non_hispanic,
        };
        Some(value)
    }

    /// All subgroup percentages in reporting order
    #[must_use]
    pub fn percentages(&self) -> [(CensusVariable, f64); SUBGROUP_COUNT] {
        CensusVariable::SUBGROUPS.map(|v| (v, self.percentage(v).unwrap_or_default()))
    }
}

/// A record flattened together with its place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRecord {
    pub name: String,
    #[serde(flatten)]
    pub record: DemographicRecord,
}

impl FilteredRecord {
    pub fn new(name: impl Into<String>, record: DemographicRecord) -> Self {
        Self {
            name: name.into(),
            record,
        }
    }

    #[must_use]
    pub const fn population(&self) -> u64 {
        self.record.population
    }
}
