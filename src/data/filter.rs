use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Suggested initial cost range, clamped into the dataset's domain on load.
pub const DEFAULT_COST_RANGE: (u32, u32) = (100, 500);

/// Initial minimum-rating threshold.
pub const DEFAULT_MIN_RATING: f64 = 3.5;

/// The user's current filter selections. Ephemeral; recomputed defaults on
/// every dataset (re)load.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Selected compound cuisine label. `None` only when the dataset offers
    /// no options; nothing matches then.
    pub cuisine: Option<String>,
    /// Inclusive cost-for-two bounds, `lo <= hi`, within `[0, max_cost]`.
    pub cost_range: (u32, u32),
    /// Rating floor in `[0.0, 5.0]`.
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            cuisine: None,
            cost_range: DEFAULT_COST_RANGE,
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl FilterCriteria {
    /// Defaults for a freshly loaded dataset: first cuisine option and the
    /// suggested cost range clamped componentwise into `[0, max_cost]`, so
    /// the initial range stays valid even when the dataset's maximum cost
    /// is below the suggested bounds.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (lo, hi) = DEFAULT_COST_RANGE;
        FilterCriteria {
            cuisine: dataset.cuisine_options.first().cloned(),
            cost_range: (lo.min(dataset.max_cost), hi.min(dataset.max_cost)),
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

// ---------------------------------------------------------------------------
// Conjunctive predicate
// ---------------------------------------------------------------------------

/// Return indices of restaurants passing all three filters, in original
/// dataset order (stable, no re-sort).
///
/// A restaurant matches when:
/// * its `cuisines` text contains the selected cuisine as a
///   case-insensitive substring (compound labels match on any part),
/// * its cost is defined and within the inclusive range,
/// * its rating is defined and at least `min_rating`.
///
/// Missing cost or rating never matches, even against a 0.0 floor.
pub fn matching_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    let Some(cuisine) = &criteria.cuisine else {
        return Vec::new();
    };
    let needle = cuisine.to_lowercase();
    let (lo, hi) = criteria.cost_range;
    let (lo, hi) = (f64::from(lo), f64::from(hi));

    dataset
        .restaurants
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.cuisines.to_lowercase().contains(&needle)
                && r.cost_for_two.is_some_and(|c| c >= lo && c <= hi)
                && r.rating.is_some_and(|v| v >= criteria.min_rating)
        })
        .map(|(i, _)| i)
        .collect()
}
