use std::collections::BTreeMap;

use super::loader::RawRow;
use super::model::Restaurant;

// ---------------------------------------------------------------------------
// Cleaning pipeline: raw rows → Restaurant values
// ---------------------------------------------------------------------------

/// Clean parsed rows, in this order:
/// 1. impute missing `cuisines` with the column mode (computed over the raw
///    column before any other step runs),
/// 2. lowercase `cuisines`,
/// 3. coerce cost (thousands separators stripped), rating, and votes, with
///    per-cell soft fail to missing,
/// 4. fill missing votes with 0.
///
/// Cell-level coercion failures never abort the pipeline.
pub fn clean_rows(rows: Vec<RawRow>) -> Vec<Restaurant> {
    let mode = cuisine_mode(&rows).unwrap_or_default();

    rows.into_iter()
        .map(|row| {
            let cuisines = row
                .cuisines
                .unwrap_or_else(|| mode.clone())
                .to_lowercase();
            Restaurant {
                name: row.name,
                cuisines,
                cost_for_two: row.cost_for_two.as_deref().and_then(parse_cost),
                rating: row.rating.as_deref().and_then(parse_number),
                votes: row
                    .votes
                    .as_deref()
                    .and_then(parse_number)
                    .map(|v| v.max(0.0) as u32)
                    .unwrap_or(0),
            }
        })
        .collect()
}

/// Most frequent non-missing `cuisines` value. Ties break to the
/// lexicographically smallest value so imputation is deterministic and
/// independent of row order. `None` when the whole column is missing.
fn cuisine_mode(rows: &[RawRow]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        if let Some(c) = &row.cuisines {
            *counts.entry(c.as_str()).or_default() += 1;
        }
    }
    // BTreeMap iterates in key order; keeping only strictly larger counts
    // leaves the lexicographically smallest of the tied values.
    let mut best: Option<(&str, usize)> = None;
    for (value, n) in counts {
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v.to_string())
}

/// Parse a cost cell: strip thousands separators, then parse. Failure is
/// missing, not an error.
fn parse_cost(s: &str) -> Option<f64> {
    parse_number(&s.replace(',', ""))
}

/// Parse a numeric cell with soft fail to missing.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(cuisines: Option<&str>, cost: Option<&str>, rating: Option<&str>, votes: Option<&str>) -> RawRow {
        RawRow {
            name: "R".to_string(),
            cuisines: cuisines.map(str::to_string),
            cost_for_two: cost.map(str::to_string),
            rating: rating.map(str::to_string),
            votes: votes.map(str::to_string),
        }
    }

    #[test]
    fn cuisines_are_never_missing_and_always_lowercase() {
        let cleaned = clean_rows(vec![
            raw(Some("North Indian"), None, None, None),
            raw(Some("North Indian"), None, None, None),
            raw(Some("Chinese, Thai"), None, None, None),
            raw(None, None, None, None),
        ]);
        assert!(cleaned.iter().all(|r| !r.cuisines.is_empty()));
        assert!(cleaned.iter().all(|r| r.cuisines == r.cuisines.to_lowercase()));
        // The missing row got the column mode.
        assert_eq!(cleaned[3].cuisines, "north indian");
    }

    #[test]
    fn mode_ties_break_lexicographically() {
        let cleaned = clean_rows(vec![
            raw(Some("thai"), None, None, None),
            raw(Some("chinese"), None, None, None),
            raw(None, None, None, None),
        ]);
        assert_eq!(cleaned[2].cuisines, "chinese");
    }

    #[test]
    fn all_missing_cuisines_impute_to_empty_string() {
        let cleaned = clean_rows(vec![raw(None, None, None, None)]);
        assert_eq!(cleaned[0].cuisines, "");
    }

    #[test]
    fn cost_strips_thousands_separators() {
        let cleaned = clean_rows(vec![raw(Some("thai"), Some("1,200"), None, None)]);
        assert_eq!(cleaned[0].cost_for_two, Some(1200.0));
    }

    #[test]
    fn non_numeric_cost_becomes_missing_not_an_error() {
        let cleaned = clean_rows(vec![raw(Some("thai"), Some("N/A"), Some("not a rating"), None)]);
        assert_eq!(cleaned[0].cost_for_two, None);
        assert_eq!(cleaned[0].rating, None);
    }

    #[test]
    fn votes_default_to_zero_and_never_go_negative() {
        let cleaned = clean_rows(vec![
            raw(Some("thai"), None, None, None),
            raw(Some("thai"), None, None, Some("garbage")),
            raw(Some("thai"), None, None, Some("-3")),
            raw(Some("thai"), None, None, Some("42")),
        ]);
        assert_eq!(cleaned[0].votes, 0);
        assert_eq!(cleaned[1].votes, 0);
        assert_eq!(cleaned[2].votes, 0);
        assert_eq!(cleaned[3].votes, 42);
    }
}
