//! Outbound census API queries

use std::fmt;

use crate::config::CensusConfig;
use crate::models::CensusVariable;
use crate::models::variables::COUNTY_PART_FIELD;

/// Geography clause for a single-county request
pub const PLACE_GEOGRAPHY: &str = "place:*";

const KEY_PARAM: &str = "key";

/// One GET request against the census endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusQuery {
    scope: String,
    params: Vec<(&'static str, String)>,
    county_column: Option<&'static str>,
}

impl CensusQuery {
    fn build(config: &CensusConfig, scope: String, geography: String, within: String) -> Self {
        Self {
            scope,
            county_column: None,
            params: vec![
                ("get", CensusVariable::get_clause()),
                ("for", geography),
                ("in", within),
                (KEY_PARAM, config.api_key.trim().to_string()),
            ],
        }
    }

    /// Every place/county part of the configured state
    ///
    /// Rows carry the enclosing county under [`COUNTY_PART_FIELD`].
    #[must_use]
    pub fn state_wide(config: &CensusConfig) -> Self {
        let mut query = Self::build(
            config,
            format!("{} statewide", config.state.name),
            format!("{COUNTY_PART_FIELD}:*"),
            format!("state:{} place:*", config.state.fips),
        );
        query.county_column = Some(COUNTY_PART_FIELD);
        query
    }

    /// Places inside one county
    #[must_use]
    pub fn per_county(config: &CensusConfig, county_name: &str, county_fips: &str) -> Self {
        Self::build(
            config,
            format!("{county_name} County"),
            PLACE_GEOGRAPHY.to_string(),
            format!("state:{} county:{county_fips}", config.state.fips),
        )
    }

    /// Short description used in logs and errors
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Response column holding each row's county FIPS code, if the
    /// geography returns one per row
    #[must_use]
    pub fn county_column(&self) -> Option<&'static str> {
        self.county_column
    }

    /// Query parameters, including the credential
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Renders the query string with the credential masked
impl fmt::Display for CensusQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .params
            .iter()
            .map(|(key, value)| {
                if *key == KEY_PARAM {
                    format!("{key}=<redacted>")
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "{rendered}")
    }
}
