//! Typed decoding of the census API's tabular JSON
//!
//! The API answers with an array of arrays: the first row names the
//! columns, every following row holds one place's values as strings.
//! [`ResponseGrid`] captures that shape, [`ColumnIndex`] locates the
//! columns we need once per response, and [`CensusRow`] is the typed
//! per-row decode.

use crate::error::{CensusError, Result, RowError};
use crate::models::record::SubgroupCounts;
use crate::models::variables::{CensusVariable, NAME_FIELD, SUBGROUP_COUNT};

/// Header row plus data rows of a census response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResponseGrid {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Parse a raw response body
    ///
    /// An empty body (the API's "no content" reply) yields an empty grid.
    pub fn parse(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut grid: Vec<Vec<Option<String>>> = serde_json::from_str(body)
            .map_err(|e| CensusError::MalformedResponse(format!("not a JSON array of arrays: {e}")))?;

        if grid.is_empty() {
            return Ok(Self::default());
        }

        let headers = grid
            .remove(0)
            .into_iter()
            .enumerate()
            .map(|(idx, header)| {
                header.ok_or_else(|| {
                    CensusError::MalformedResponse(format!("header column {idx} is null"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { headers, rows: grid })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Column positions of the fields a [`CensusRow`] is decoded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    width: usize,
    name: usize,
    total: usize,
    subgroups: [usize; SUBGROUP_COUNT],
    county: Option<usize>,
}

impl ColumnIndex {
    /// Locate the required columns in a header row
    ///
    /// With `county_column` set, that column is required and decoded into
    /// [`CensusRow::county`].
    pub fn resolve(headers: &[String], county_column: Option<&str>) -> Result<Self> {
        let find = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| CensusError::MalformedResponse(format!("missing column '{column}'")))
        };

        let mut subgroups = [0; SUBGROUP_COUNT];
        for (slot, variable) in subgroups.iter_mut().zip(CensusVariable::SUBGROUPS) {
            *slot = find(variable.code())?;
        }

        let county = county_column.map(find).transpose()?;

        Ok(Self {
            width: headers.len(),
            name: find(NAME_FIELD)?,
            total: find(CensusVariable::TotalPopulation.code())?,
            subgroups,
            county,
        })
    }
}

/// One typed response row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusRow {
    /// Raw place name, e.g. `"Dublin city, Ohio"` or, for a county part,
    /// `"Franklin County (part), Dublin city, Ohio"`
    pub name: String,
    /// Enclosing county FIPS code, when a county column was resolved
    pub county: Option<String>,
    /// Total population
    pub total: u64,
    pub counts: SubgroupCounts,
}

impl CensusRow {
    /// Decode one row against a resolved column index
    pub fn decode(
        index: &ColumnIndex,
        headers: &[String],
        row: &[Option<String>],
    ) -> std::result::Result<Self, RowError> {
        if row.len() != index.width {
            return Err(RowError::LengthMismatch {
                expected: index.width,
                found: row.len(),
            });
        }

        let mut counts = [0; SUBGROUP_COUNT];
        for (slot, idx) in counts.iter_mut().zip(index.subgroups) {
            *slot = count_at(headers, row, idx)?;
        }

        Ok(Self {
            name: cell(headers, row, index.name)?.to_string(),
            county: index
                .county
                .map(|idx| cell(headers, row, idx).map(str::to_string))
                .transpose()?,
            total: count_at(headers, row, index.total)?,
            counts: SubgroupCounts(counts),
        })
    }
}

fn cell<'a>(
    headers: &[String],
    row: &'a [Option<String>],
    idx: usize,
) -> std::result::Result<&'a str, RowError> {
    row[idx].as_deref().ok_or_else(|| RowError::NullValue {
        column: headers[idx].clone(),
    })
}

fn count_at(
    headers: &[String],
    row: &[Option<String>],
    idx: usize,
) -> std::result::Result<u64, RowError> {
    let value = cell(headers, row, idx)?;
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| RowError::InvalidCount {
            column: headers[idx].clone(),
            value: value.to_string(),
            source,
        })
}
