use std::borrow::Cow;
use std::path::Path;

use thiserror::Error;

use super::clean::clean_rows;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Required columns (Zomato export header names)
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Restaurant Name";
pub const COL_CUISINES: &str = "Cuisines";
pub const COL_COST: &str = "Average Cost for two";
pub const COL_RATING: &str = "Aggregate rating";
pub const COL_VOTES: &str = "Votes";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failures. Malformed individual cell values are not errors;
/// they degrade to missing during cleaning.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Raw rows – parsed but not yet cleaned
// ---------------------------------------------------------------------------

/// One source row with cells as raw text. `None` marks an empty cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub name: String,
    pub cuisines: Option<String>,
    pub cost_for_two: Option<String>,
    pub rating: Option<String>,
    pub votes: Option<String>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean a restaurant dataset from a CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes)
}

/// Load and clean a restaurant dataset from raw CSV bytes.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let text = decode(bytes);
    let rows = parse_rows(&text)?;
    Ok(Dataset::from_restaurants(clean_rows(rows)))
}

// ---------------------------------------------------------------------------
// Byte decoding
// ---------------------------------------------------------------------------

/// Decode as UTF-8 when valid, otherwise fall back to Latin-1 (every byte
/// maps to the Unicode scalar of the same value, so this never fails).
/// Zomato exports use Latin-1 for accented restaurant names.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn parse_rows(text: &str) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let position = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let name_idx = position(COL_NAME)?;
    let cuisines_idx = position(COL_CUISINES)?;
    let cost_idx = position(COL_COST)?;
    let rating_idx = position(COL_RATING)?;
    let votes_idx = position(COL_VOTES)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(RawRow {
            name: record.get(name_idx).unwrap_or("").to_string(),
            cuisines: cell(&record, cuisines_idx),
            cost_for_two: cell(&record, cost_idx),
            rating: cell(&record, rating_idx),
            votes: cell(&record, votes_idx),
        });
    }
    Ok(rows)
}

/// Fetch a cell, mapping empty text to missing.
fn cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    match record.get(idx) {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}
