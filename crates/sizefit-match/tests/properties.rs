//! Property-based invariant tests for the matcher and resolver.
//!
//! 1. `match_size` never panics, for any query text and table
//! 2. An exact result's record value parses equal to the query
//! 3. A non-exact result minimizes the absolute difference, first wins ties
//! 4. `resolve_cell` never panics and a direct key hit is returned unchanged
//! 5. `translate_header` is identity for headers absent from the dictionary

use std::collections::BTreeMap;

use proptest::prelude::*;
use sizefit_match::{PLACEHOLDER, match_size, resolve_cell, translate_header};
use sizefit_model::{CellValue, ClothingRow, ShoeEntry, Unit};

fn entries_strategy() -> impl Strategy<Value = Vec<ShoeEntry>> {
    prop::collection::vec(
        (prop::option::of(0u32..600), prop::option::of(0u32..600)).prop_map(|(eu, uk)| {
            ShoeEntry {
                eu: eu.map(|value| format!("{}.5", value / 10)),
                uk: uk.map(|value| value.to_string()),
                ..ShoeEntry::default()
            }
        }),
        0..16,
    )
}

proptest! {
    #[test]
    fn match_never_panics(entries in entries_strategy(), query in ".{0,12}") {
        let _ = match_size(&entries, &query, Unit::Eu);
    }

    #[test]
    fn exact_match_parses_equal(entries in entries_strategy(), raw in 0u32..600) {
        let query = format!("{}.5", raw / 10);
        if let Some(result) = match_size(&entries, &query, Unit::Eu) {
            prop_assert_eq!(result.entry, &entries[result.index]);
            if result.exact {
                let value: f64 = result.entry.value(Unit::Eu).unwrap().parse().unwrap();
                let wanted: f64 = query.parse().unwrap();
                prop_assert_eq!(value, wanted);
            }
        }
    }

    #[test]
    fn closest_match_minimizes_difference(entries in entries_strategy(), raw in 0u32..600) {
        let query = format!("{raw}");
        let wanted: f64 = query.parse().unwrap();
        if let Some(result) = match_size(&entries, &query, Unit::Eu)
            && !result.exact
        {
            let result_value: f64 = result.entry.value(Unit::Eu).unwrap().parse().unwrap();
            let result_diff = (result_value - wanted).abs();
            for (index, entry) in entries.iter().enumerate() {
                let Some(value) = entry.value(Unit::Eu) else { continue };
                let diff = (value.parse::<f64>().unwrap() - wanted).abs();
                prop_assert!(diff >= result_diff);
                if index < result.index {
                    prop_assert!(diff > result_diff);
                }
            }
        }
    }

    #[test]
    fn resolve_is_total(keys in prop::collection::vec("[A-Za-z0-9_ ()]{0,12}", 0..8),
                        header in "[A-Za-z0-9_ ()]{0,16}") {
        let row: ClothingRow = keys
            .into_iter()
            .map(|key| (key, CellValue::Text("x".to_string())))
            .collect();
        let resolved = resolve_cell(&row, &header);
        prop_assert!(!resolved.is_empty());
    }

    #[test]
    fn direct_hit_round_trips(header in "[A-Za-z][A-Za-z0-9_ ]{0,11}", value in "[0-9]{1,3}") {
        let mut row = ClothingRow::new();
        row.insert(header.clone(), CellValue::Text(value.clone()));
        prop_assert_eq!(resolve_cell(&row, &header), value.as_str());
    }

    #[test]
    fn unknown_header_translates_to_itself(header in "[A-Za-z]{1,12}") {
        let labels = BTreeMap::new();
        prop_assert_eq!(translate_header(&header, &labels), header.as_str());
    }
}

#[test]
fn placeholder_is_single_dash() {
    assert_eq!(PLACEHOLDER, "-");
}
