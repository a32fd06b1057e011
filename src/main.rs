use anyhow::Context;
use census_towns::utils::logging::{log_warning, print_filtered_records, print_match_count};
use census_towns::{CensusConfig, CensusFetcher, PopulationRange, filter_and_sort};
use log::info;

/// Census API key; requests are refused while this is the placeholder
const API_KEY: &str = "YOUR_API_KEY_HERE";

const COUNTIES_TO_SEARCH: [&str; 2] = ["Franklin", "Delaware"];
const MIN_POPULATION: u64 = 30_000;
const MAX_POPULATION: Option<u64> = Some(100_000);

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CensusConfig::default().with_api_key(API_KEY);
    info!("{config}");

    let fetcher = CensusFetcher::new(config).context("Failed to set up the census client")?;
    let demographics = fetcher
        .fetch(&COUNTIES_TO_SEARCH)
        .context("Failed to fetch municipal demographics")?;

    let range = PopulationRange::new(MIN_POPULATION, MAX_POPULATION);
    let towns = filter_and_sort(&demographics, &range);
    if towns.is_empty() {
        log_warning("No municipalities in population range", Some(range.to_string().as_str()));
    }

    print_filtered_records(&towns).context("Failed to serialize filtered municipalities")?;
    print_match_count(towns.len());

    Ok(())
}
