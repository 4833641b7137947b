use url::form_urlencoded::byte_serialize;

use crate::data::model::Restaurant;

// ---------------------------------------------------------------------------
// Listing – presentation payload for one matching restaurant
// ---------------------------------------------------------------------------

/// Display-ready fields derived from a matching restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub name: String,
    /// Title-cased cuisine string, e.g. `"North Indian, Chinese"`.
    pub cuisine: String,
    /// Cost for two as a truncated integer with currency symbol.
    pub cost_label: String,
    pub rating_label: String,
    /// Google Maps search deep link for this restaurant.
    pub maps_url: String,
}

impl Listing {
    pub fn from_restaurant(r: &Restaurant) -> Self {
        Listing {
            name: r.name.clone(),
            cuisine: title_case(&r.cuisines),
            cost_label: match r.cost_for_two {
                Some(c) => format!("₹{}", c as i64),
                None => "—".to_string(),
            },
            rating_label: match r.rating {
                Some(v) => format!("{v}"),
                None => "—".to_string(),
            },
            maps_url: maps_search_url(&r.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Maps search link
// ---------------------------------------------------------------------------

/// Build a Google Maps search URL for `"{name} restaurant"`, percent-encoded
/// per x-www-form-urlencoded rules (spaces become `+`).
pub fn maps_search_url(name: &str) -> String {
    let query: String = byte_serialize(format!("{name} restaurant").as_bytes()).collect();
    format!("https://www.google.com/maps/search/?api=1&query={query}")
}

// ---------------------------------------------------------------------------
// Title casing
// ---------------------------------------------------------------------------

/// Uppercase the first letter of each alphabetic run, lowercase the rest
/// (the behavior of Python's `str.title()`, which produced the original
/// labels).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_compound_cuisine_labels() {
        assert_eq!(title_case("north indian, chinese"), "North Indian, Chinese");
        assert_eq!(title_case("THAI"), "Thai");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn maps_url_encodes_spaces_as_plus() {
        assert_eq!(
            maps_search_url("A"),
            "https://www.google.com/maps/search/?api=1&query=A+restaurant"
        );
        assert_eq!(
            maps_search_url("Spice Route"),
            "https://www.google.com/maps/search/?api=1&query=Spice+Route+restaurant"
        );
    }

    #[test]
    fn maps_url_percent_encodes_special_characters() {
        assert_eq!(
            maps_search_url("Café & Bar"),
            "https://www.google.com/maps/search/?api=1&query=Caf%C3%A9+%26+Bar+restaurant"
        );
    }

    #[test]
    fn cost_label_truncates_to_integer() {
        let r = Restaurant {
            name: "A".to_string(),
            cuisines: "thai".to_string(),
            cost_for_two: Some(449.9),
            rating: Some(4.2),
            votes: 10,
        };
        let listing = Listing::from_restaurant(&r);
        assert_eq!(listing.cost_label, "₹449");
        assert_eq!(listing.rating_label, "4.2");
        assert_eq!(listing.cuisine, "Thai");
    }
}
