//! Census variables tracked by the fetcher
//!
//! Codes come from table P2 ("Hispanic or Latino, and not Hispanic or Latino
//! by race") of the 2020 Decennial Census redistricting file.

use std::fmt;

/// A census variable requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CensusVariable {
    TotalPopulation,
    Hispanic,
    WhiteNonHispanic,
    BlackNonHispanic,
    NativeNonHispanic,
    AsianNonHispanic,
    PacificIslanderNonHispanic,
    OtherNonHispanic,
    MultiracialNonHispanic,
}

/// Number of subgroup variables (every variable except the total)
pub const SUBGROUP_COUNT: usize = 8;

impl CensusVariable {
    /// All variables in request order
    pub const ALL: [Self; SUBGROUP_COUNT + 1] = [
        Self::TotalPopulation,
        Self::Hispanic,
        Self::WhiteNonHispanic,
        Self::BlackNonHispanic,
        Self::NativeNonHispanic,
        Self::AsianNonHispanic,
        Self::PacificIslanderNonHispanic,
        Self::OtherNonHispanic,
        Self::MultiracialNonHispanic,
    ];

    /// Subgroup variables, in the order their percentages are reported
    pub const SUBGROUPS: [Self; SUBGROUP_COUNT] = [
        Self::Hispanic,
        Self::WhiteNonHispanic,
        Self::BlackNonHispanic,
        Self::NativeNonHispanic,
        Self::AsianNonHispanic,
        Self::PacificIslanderNonHispanic,
        Self::OtherNonHispanic,
        Self::MultiracialNonHispanic,
    ];

    /// API variable code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TotalPopulation => "P2_001N",
            Self::Hispanic => "P2_002N",
            Self::WhiteNonHispanic => "P2_005N",
            Self::BlackNonHispanic => "P2_006N",
            Self::NativeNonHispanic => "P2_007N",
            Self::AsianNonHispanic => "P2_008N",
            Self::PacificIslanderNonHispanic => "P2_009N",
            Self::OtherNonHispanic => "P2_010N",
            Self::MultiracialNonHispanic => "P2_011N",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalPopulation => "total_population",
            Self::Hispanic => "hispanic",
            Self::WhiteNonHispanic => "white_non_hispanic",
            Self::BlackNonHispanic => "black_non_hispanic",
            Self::NativeNonHispanic => "native_non_hispanic",
            Self::AsianNonHispanic => "asian_non_hispanic",
            Self::PacificIslanderNonHispanic => "pacific_islander_non_hispanic",
            Self::OtherNonHispanic => "other_non_hispanic",
            Self::MultiracialNonHispanic => "multiracial_non_hispanic",
        }
    }

    #[must_use]
    pub const fn is_total(self) -> bool {
        matches!(self, Self::TotalPopulation)
    }

    /// Comma-joined `get` clause: `NAME` followed by every variable code
    #[must_use]
    pub fn get_clause() -> String {
        std::iter::once(NAME_FIELD)
            .chain(Self::ALL.iter().map(|v| v.code()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for CensusVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}

/// Column carrying the raw place name
pub const NAME_FIELD: &str = "NAME";

/// Geography level of a place/county part
///
/// The API names the returned FIPS column after the requested level, so this
/// is both the `for` level of the state-wide query and the column the county
/// post-filter reads.
pub const COUNTY_PART_FIELD: &str = "county (or part)";
