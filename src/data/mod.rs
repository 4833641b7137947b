/// Data layer: core types, loading, cleaning, and filtering.
///
/// Architecture:
/// ```text
///      .csv (Zomato export)
///           │
///           ▼
///      ┌──────────┐
///      │  loader   │  decode bytes, parse rows, locate required columns
///      └──────────┘
///           │
///           ▼
///      ┌──────────┐
///      │  clean    │  impute cuisines, lowercase, coerce numeric columns
///      └──────────┘
///           │
///           ▼
///      ┌──────────┐
///      │ Dataset   │  Vec<Restaurant>, cuisine options, max cost
///      └──────────┘
///           │
///           ▼
///      ┌──────────┐
///      │  filter   │  conjunctive predicate → matching indices
///      └──────────┘
/// ```

pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
