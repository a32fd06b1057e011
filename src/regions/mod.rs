//! Geographic lookup tables
//!
//! The census API addresses areas by FIPS code. This module holds the state
//! being queried and the county name to FIPS table used to scope requests.

use std::fmt;

/// FIPS code of Ohio
pub const OHIO_STATE_FIPS: &str = "39";

/// County FIPS codes for the Ohio counties the tool knows about
const OHIO_COUNTY_FIPS: [(&str, &str); 13] = [
    ("Franklin", "049"),
    ("Cuyahoga", "035"),
    ("Hamilton", "061"),
    ("Summit", "153"),
    ("Montgomery", "113"),
    ("Lucas", "095"),
    ("Stark", "151"),
    ("Butler", "017"),
    ("Lorain", "093"),
    ("Warren", "165"),
    ("Delaware", "041"),
    ("Greene", "057"),
    ("Clermont", "025"),
];

/// The top-level region a query is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRegion {
    /// Two-digit state FIPS code
    pub fips: String,
    /// Display name as it appears in the API's `NAME` column
    pub name: String,
}

impl StateRegion {
    pub fn new(fips: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fips: fips.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn ohio() -> Self {
        Self::new(OHIO_STATE_FIPS, "Ohio")
    }

    /// Trailing suffix the API appends to place names, e.g. `", Ohio"`
    #[must_use]
    pub fn name_suffix(&self) -> String {
        format!(", {}", self.name)
    }

    /// Reduce a raw `NAME` value to the bare place name
    ///
    /// The trailing state suffix is stripped, so `"Dublin city, Ohio"`
    /// becomes `"Dublin city"`. Place/county parts are named after both
    /// areas, e.g. `"Franklin County (part), Dublin city, Ohio"`; the county
    /// segment and any `" (part)"` marker are dropped so every part of a
    /// place cleans to the same name. Names without the suffix are returned
    /// trimmed but otherwise unchanged.
    #[must_use]
    pub fn clean_place_name(&self, raw: &str) -> String {
        let suffix = self.name_suffix();
        let trimmed = raw.trim();
        let Some(place) = trimmed.strip_suffix(suffix.as_str()) else {
            return trimmed.to_string();
        };

        let segments: Vec<&str> = place
            .split(", ")
            .filter(|segment| !is_county_segment(segment))
            .map(|segment| segment.strip_suffix(PART_MARKER).unwrap_or(segment).trim())
            .collect();
        if segments.is_empty() {
            return place.trim().to_string();
        }
        segments.join(", ")
    }
}

/// Marker the API appends to an area that is split by another
const PART_MARKER: &str = " (part)";

fn is_county_segment(segment: &str) -> bool {
    segment
        .strip_suffix(PART_MARKER)
        .unwrap_or(segment)
        .trim_end()
        .ends_with(" County")
}

impl Default for StateRegion {
    fn default() -> Self {
        Self::ohio()
    }
}

impl fmt::Display for StateRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (state:{})", self.name, self.fips)
    }
}

/// Immutable county name to FIPS code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyTable {
    entries: Vec<(String, String)>,
}

impl CountyTable {
    /// Build a table from `(name, fips)` pairs
    ///
    /// A name listed twice keeps its first code.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (name, code) in pairs {
            let name = name.into();
            if entries.iter().any(|(existing, _)| *existing == name) {
                continue;
            }
            entries.push((name, code.into()));
        }
        Self { entries }
    }

    #[must_use]
    pub fn ohio() -> Self {
        Self::from_pairs(OHIO_COUNTY_FIPS)
    }

    /// Look up the FIPS code of a county by exact name
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(county, _)| county == name)
            .map(|(_, code)| code.as_str())
    }

    /// Name of the county with the given FIPS code
    #[must_use]
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, fips)| fips == code)
            .map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountyTable {
    fn default() -> Self {
        Self::ohio()
    }
}
