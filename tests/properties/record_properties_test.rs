use census_towns::models::SubgroupCounts;
use census_towns::models::record::round2;
use census_towns::{
    CensusVariable, DemographicRecord, DemographicTable, PopulationRange, QueryMode,
    filter_and_sort,
};
use proptest::prelude::*;

use crate::utils::{PlaceRow, StubTransport, state_wide_grid, stub_fetcher, test_config};

const PLACE_NAMES: [&str; 20] = [
    "P0, Ohio", "P1, Ohio", "P2, Ohio", "P3, Ohio", "P4, Ohio", "P5, Ohio", "P6, Ohio",
    "P7, Ohio", "P8, Ohio", "P9, Ohio", "P10, Ohio", "P11, Ohio", "P12, Ohio", "P13, Ohio",
    "P14, Ohio", "P15, Ohio", "P16, Ohio", "P17, Ohio", "P18, Ohio", "P19, Ohio",
];

/// Population plus subgroup counts that partition it exactly
///
/// Seven sorted cut points split `0..=population` into eight spans.
fn population_and_counts() -> impl Strategy<Value = (u64, [u64; 8])> {
    (1_u64..5_000_000)
        .prop_flat_map(|population| (Just(population), prop::array::uniform7(0..=population)))
        .prop_map(|(population, mut cuts)| {
            cuts.sort_unstable();
            let mut counts = [0; 8];
            let mut previous = 0;
            for (slot, cut) in counts.iter_mut().zip(cuts.iter().chain([&population])) {
                *slot = cut - previous;
                previous = *cut;
            }
            (population, counts)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn percentages_match_rounded_share((population, counts) in population_and_counts()) {
        let subgroups = SubgroupCounts(counts);
        let record = DemographicRecord::from_counts(population, &subgroups).unwrap();

        for (variable, count) in subgroups.iter() {
            let expected = round2((count as f64 / population as f64) * 100.0);
            prop_assert_eq!(record.percentage(variable), Some(expected));
        }
        prop_assert_eq!(record.percentage(CensusVariable::TotalPopulation), None);

        prop_assert_eq!(subgroups.iter().map(|(_, count)| count).sum::<u64>(), population);

        // Each share rounds by at most half a hundredth
        let total: f64 = record.percentages().iter().map(|(_, pct)| pct).sum();
        let slack = 0.005 * 8.0 + 1e-9;
        prop_assert!((total - 100.0).abs() <= slack, "shares sum to {}", total);
    }

    #[test]
    fn zero_population_rows_never_appear(totals in prop::collection::vec(0_u64..3, 1..20)) {
        let rows: Vec<PlaceRow> = totals
            .iter()
            .enumerate()
            .map(|(idx, total)| PlaceRow::uniform(PLACE_NAMES[idx], "049", *total))
            .collect();
        let fetcher = stub_fetcher(
            test_config(QueryMode::StateWide),
            StubTransport::new().respond(state_wide_grid(&rows)),
        );

        let table = fetcher.fetch(&["Franklin"]).unwrap();
        let populated = totals.iter().filter(|t| **t > 0).count();
        prop_assert_eq!(table.len(), populated);
        prop_assert!(table.iter().all(|(_, record)| record.population > 0));
    }

    #[test]
    fn filter_output_is_sorted_stable_and_bounded(
        populations in prop::collection::vec(1_u64..200, 0..40),
        min in 0_u64..200,
        max in prop::option::of(0_u64..200),
    ) {
        let table: DemographicTable = populations
            .iter()
            .enumerate()
            .map(|(idx, population)| {
                let record = DemographicRecord::from_counts(*population, &SubgroupCounts::default()).unwrap();
                (format!("place-{idx}"), record)
            })
            .collect();
        let range = PopulationRange::new(min, max);

        let towns = filter_and_sort(&table, &range);

        prop_assert!(towns.iter().all(|t| range.contains(t.population())));
        prop_assert!(towns.windows(2).all(|w| w[0].population() >= w[1].population()));

        // Same entries as a naive filter, ties in insertion order
        let mut expected: Vec<(usize, &str, u64)> = table
            .iter()
            .enumerate()
            .filter(|(_, (_, record))| range.contains(record.population))
            .map(|(idx, (name, record))| (idx, name, record.population))
            .collect();
        expected.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
        let expected_names: Vec<&str> = expected.iter().map(|(_, name, _)| *name).collect();
        let actual_names: Vec<&str> = towns.iter().map(|t| t.name.as_str()).collect();
        prop_assert_eq!(actual_names, expected_names);
    }
}
