//! Substring matching of search queries against item records.
//!
//! Matching is substring containment, not exact equality: a user searching
//! "red" should find a "dark red jacket" listing. Containment is
//! case-insensitive; the query side is normalized (lowercased, trimmed) by
//! the caller, candidate fields are compared as stored except for case.

use reclaim_types::{ItemRecord, SearchQuery};

/// Whether a single record satisfies a normalized query.
///
/// The name field is always compared; color and brand only when the query
/// specifies them. A record matches only if every compared field contains the
/// corresponding query value. An empty query name matches everything, which
/// is why the HTTP boundary rejects name-less queries before they get here.
pub fn matches(query: &SearchQuery, item: &ItemRecord) -> bool {
    let name = item.item_name.to_lowercase();
    let color = item.color.to_lowercase();
    let brand = item.brand.as_deref().unwrap_or_default().to_lowercase();

    let name_match = name.contains(&query.item_name);
    let color_match = query.color.as_deref().map_or(true, |c| color.contains(c));
    let brand_match = query.brand.as_deref().map_or(true, |b| brand.contains(b));

    name_match && color_match && brand_match
}

/// Filter candidates down to the records matching `query`.
///
/// Returns an order-preserving subsequence of the input. Pure: re-running
/// with identical inputs yields identical output.
pub fn search(query: &SearchQuery, candidates: Vec<ItemRecord>) -> Vec<ItemRecord> {
    candidates
        .into_iter()
        .filter(|item| matches(query, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reclaim_types::ItemId;

    fn record(id: u64, name: &str, color: &str, brand: Option<&str>) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            email: "owner@example.com".to_string(),
            item_name: name.to_string(),
            color: color.to_string(),
            brand: brand.map(|b| b.to_string()),
            location: "campus".to_string(),
            verified: true,
        }
    }

    fn query(name: &str, color: Option<&str>, brand: Option<&str>) -> SearchQuery {
        SearchQuery {
            item_name: name.to_string(),
            color: color.map(|c| c.to_string()),
            brand: brand.map(|b| b.to_string()),
        }
        .normalized()
    }

    #[test]
    fn name_substring_matches_case_insensitively() {
        let candidates = vec![record(1, "Blue Backpack", "Blue", Some("Nike"))];
        let results = search(&query("backpack", None, None), candidates);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, ItemId::new(1));
    }

    #[test]
    fn color_mismatch_excludes_record() {
        let candidates = vec![record(1, "Blue Backpack", "Blue", Some("Nike"))];
        let results = search(&query("backpack", Some("red"), None), candidates);
        assert!(results.is_empty());
    }

    #[test]
    fn absent_optional_fields_are_wildcards() {
        let candidates = vec![
            record(1, "Umbrella", "Black", None),
            record(2, "Umbrella", "Red", Some("Totes")),
        ];
        let results = search(&query("umbrella", None, None), candidates);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn brand_is_substring_matched() {
        let candidates = vec![record(1, "Running Shoes", "White", Some("Nike Air"))];
        assert_eq!(search(&query("shoes", None, Some("nike")), candidates.clone()).len(), 1);
        assert!(search(&query("shoes", None, Some("adidas")), candidates).is_empty());
    }

    #[test]
    fn missing_brand_fails_brand_constrained_query() {
        let candidates = vec![record(1, "Scarf", "Green", None)];
        assert!(search(&query("scarf", None, Some("gucci")), candidates).is_empty());
    }

    #[test]
    fn partial_color_matches_compound_color() {
        let candidates = vec![record(1, "Jacket", "Dark Red", None)];
        let results = search(&query("jacket", Some("red"), None), candidates);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn order_of_input_is_preserved() {
        let candidates = vec![
            record(3, "Phone", "Black", None),
            record(1, "Phone case", "Black", None),
            record(2, "Headphones", "Black", None),
        ];
        let results = search(&query("phone", None, None), candidates);
        let ids: Vec<u64> = results.iter().map(|r| r.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn all_constraints_must_hold() {
        let candidates = vec![record(1, "Blue Backpack", "Blue", Some("Nike"))];
        // Right name and brand, wrong color.
        assert!(search(&query("backpack", Some("green"), Some("nike")), candidates).is_empty());
    }
}
