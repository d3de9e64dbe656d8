//! Nearest-value matching over a sparse shoe-size table.

use sizefit_model::{ShoeEntry, Unit};

/// Best match for a user query against a shoe table. Borrowed from the
/// input slice; produced once per input change and discarded on the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    /// True when some record's value equals the query exactly.
    pub exact: bool,
    pub entry: &'a ShoeEntry,
    /// Index into the input slice, used by callers to highlight the row.
    pub index: usize,
}

/// Finds the record best matching `query` in the chosen unit.
///
/// Equality is tested on parsed numeric values, so `"9.0"` matches a query
/// of `"9"`. An exact match wins outright; otherwise the record minimizing
/// the absolute difference wins, first occurrence breaking ties. Records
/// that lack the unit field (or carry a non-numeric value there) are
/// skipped. Returns `None` for unparseable queries and for tables with no
/// comparable record; never panics.
pub fn match_size<'a>(
    entries: &'a [ShoeEntry],
    query: &str,
    unit: Unit,
) -> Option<MatchResult<'a>> {
    let query: f64 = query.trim().parse().ok()?;

    let mut exact: Option<usize> = None;
    let mut closest: Option<usize> = None;
    let mut closest_diff = f64::INFINITY;

    for (index, entry) in entries.iter().enumerate() {
        let Some(raw) = entry.value(unit) else {
            continue;
        };
        let Ok(value) = raw.trim().parse::<f64>() else {
            continue;
        };
        let diff = (value - query).abs();
        if diff == 0.0 && exact.is_none() {
            exact = Some(index);
        }
        if diff < closest_diff {
            closest_diff = diff;
            closest = Some(index);
        }
    }

    let index = exact.or(closest)?;
    Some(MatchResult {
        exact: exact.is_some(),
        entry: &entries[index],
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(uk: &str, eu: &str) -> ShoeEntry {
        ShoeEntry {
            uk: Some(uk.to_string()),
            eu: Some(eu.to_string()),
            ..ShoeEntry::default()
        }
    }

    #[test]
    fn exact_match_wins() {
        let entries = vec![entry("8", "42"), entry("9", "43")];
        let result = match_size(&entries, "43", Unit::Eu).unwrap();
        assert!(result.exact);
        assert_eq!(result.index, 1);
        assert_eq!(result.entry.uk.as_deref(), Some("9"));
    }

    #[test]
    fn closest_tie_goes_to_first_record() {
        let entries = vec![entry("8", "42"), entry("9", "43")];
        let result = match_size(&entries, "42.5", Unit::Eu).unwrap();
        assert!(!result.exact);
        assert_eq!(result.index, 0);
    }

    #[test]
    fn equality_is_numeric_not_textual() {
        let entries = vec![entry("9.0", "43")];
        let result = match_size(&entries, "9", Unit::Uk).unwrap();
        assert!(result.exact);
        assert_eq!(result.index, 0);
    }

    #[test]
    fn non_numeric_query_yields_none() {
        let entries = vec![entry("8", "42")];
        assert!(match_size(&entries, "abc", Unit::Eu).is_none());
        assert!(match_size(&entries, "", Unit::Eu).is_none());
    }

    #[test]
    fn unit_absent_on_all_records_yields_none() {
        let entries = vec![entry("8", "42")];
        assert!(match_size(&entries, "9", Unit::UsMen).is_none());
        assert!(match_size(&[], "9", Unit::Eu).is_none());
    }

    #[test]
    fn records_without_the_field_are_skipped() {
        let entries = vec![
            ShoeEntry {
                uk: Some("7".to_string()),
                ..ShoeEntry::default()
            },
            entry("8", "42"),
        ];
        let result = match_size(&entries, "41", Unit::Eu).unwrap();
        assert!(!result.exact);
        assert_eq!(result.index, 1);
    }

    #[test]
    fn first_exact_occurrence_is_reported() {
        let entries = vec![entry("8", "42"), entry("8.5", "42.0")];
        let result = match_size(&entries, "42", Unit::Eu).unwrap();
        assert!(result.exact);
        assert_eq!(result.index, 0);
    }
}
