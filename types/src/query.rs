//! Search queries and their normalization.

use serde::{Deserialize, Serialize};

/// A search over the verified registry.
///
/// `item_name` is required; `color` and `brand` act as wildcards when absent.
/// Queries must be passed through [`SearchQuery::normalized`] before they are
/// handed to the matcher: matching assumes the query side is lowercased and
/// trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub item_name: String,
    pub color: Option<String>,
    pub brand: Option<String>,
}

impl SearchQuery {
    /// Lowercase and trim every field. Optional fields that trim down to the
    /// empty string become `None`, i.e. wildcards.
    pub fn normalized(&self) -> SearchQuery {
        SearchQuery {
            item_name: self.item_name.trim().to_lowercase(),
            color: normalize_optional(self.color.as_deref()),
            brand: normalize_optional(self.brand.as_deref()),
        }
    }
}

fn normalize_optional(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases_and_trims() {
        let query = SearchQuery {
            item_name: "  BackPack ".to_string(),
            color: Some("Dark Red".to_string()),
            brand: None,
        };
        let normalized = query.normalized();
        assert_eq!(normalized.item_name, "backpack");
        assert_eq!(normalized.color.as_deref(), Some("dark red"));
        assert_eq!(normalized.brand, None);
    }

    #[test]
    fn empty_optional_becomes_wildcard() {
        let query = SearchQuery {
            item_name: "wallet".to_string(),
            color: Some("   ".to_string()),
            brand: Some(String::new()),
        };
        let normalized = query.normalized();
        assert_eq!(normalized.color, None);
        assert_eq!(normalized.brand, None);
    }

    #[test]
    fn normalization_is_idempotent() {
        let query = SearchQuery {
            item_name: " Blue Umbrella".to_string(),
            color: Some("BLUE".to_string()),
            brand: Some("Totes ".to_string()),
        };
        let once = query.normalized();
        assert_eq!(once.normalized(), once);
    }
}
