use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Restaurant – one row of the source table
// ---------------------------------------------------------------------------

/// A single restaurant (one row of the cleaned dataset).
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Display name, also used to build the maps search query.
    pub name: String,
    /// Lowercase comma-joined cuisine tags, e.g. `"north indian, chinese"`.
    /// Kept as opaque text; substring matching happens against the whole
    /// string, never against split tags.
    pub cuisines: String,
    /// Average cost for two in currency units. `None` when the source cell
    /// failed numeric coercion.
    pub cost_for_two: Option<f64>,
    /// Aggregate rating in `[0.0, 5.0]`. `None` when missing.
    pub rating: Option<f64>,
    /// Vote count. Never missing; 0 when the source cell was absent or
    /// unparseable.
    pub votes: u32,
}

// ---------------------------------------------------------------------------
// Dataset – the complete cleaned table
// ---------------------------------------------------------------------------

/// The cleaned dataset with pre-computed filter domains. Immutable for the
/// lifetime of one session; a new upload builds a fresh value.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All restaurants in original file order.
    pub restaurants: Vec<Restaurant>,
    /// Distinct `cuisines` values, lexicographically sorted. These are the
    /// compound comma-joined labels, so the selector offers e.g.
    /// `"north indian, chinese"` as one option.
    pub cuisine_options: Vec<String>,
    /// Upper bound of the cost slider: ceiling of the largest defined
    /// `cost_for_two`, or 0 when no row has one.
    pub max_cost: u32,
}

impl Dataset {
    /// Build the filter domains from the cleaned rows.
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Self {
        let options: BTreeSet<String> = restaurants
            .iter()
            .map(|r| r.cuisines.clone())
            .collect();

        let max_cost = restaurants
            .iter()
            .filter_map(|r| r.cost_for_two)
            .fold(0.0_f64, f64::max)
            .ceil() as u32;

        Dataset {
            restaurants,
            cuisine_options: options.into_iter().collect(),
            max_cost,
        }
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
