use proptest::prelude::*;

use reclaim_registry::VerificationRegistry;
use reclaim_types::{ItemId, ItemKind};

fn arb_kind() -> impl Strategy<Value = ItemKind> {
    prop_oneof![Just(ItemKind::Found), Just(ItemKind::Lost)]
}

proptest! {
    /// Whatever goes in at issue comes back out at the first consume, and
    /// never at the second.
    #[test]
    fn issue_consume_roundtrip(raw_id in any::<u64>(), kind in arb_kind()) {
        let registry = VerificationRegistry::new();
        let token = registry.issue(ItemId::new(raw_id), kind).unwrap();

        let record = registry.consume(token.as_str()).unwrap();
        prop_assert_eq!(record.item_id, ItemId::new(raw_id));
        prop_assert_eq!(record.kind, kind);
        prop_assert!(registry.consume(token.as_str()).is_none());
    }

    /// Tokens are always 32 lowercase hex characters.
    #[test]
    fn token_format_is_stable(raw_id in any::<u64>(), kind in arb_kind()) {
        let registry = VerificationRegistry::new();
        let token = registry.issue(ItemId::new(raw_id), kind).unwrap();
        prop_assert_eq!(token.as_str().len(), 32);
        prop_assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    /// Consuming one token leaves every other pending token intact.
    #[test]
    fn consume_is_isolated(ids in prop::collection::vec(any::<u64>(), 2..8)) {
        let registry = VerificationRegistry::new();
        let tokens: Vec<_> = ids
            .iter()
            .map(|&id| registry.issue(ItemId::new(id), ItemKind::Found).unwrap())
            .collect();

        registry.consume(tokens[0].as_str());
        prop_assert_eq!(registry.pending_count(), tokens.len() - 1);
        for token in &tokens[1..] {
            prop_assert!(registry.consume(token.as_str()).is_some());
        }
    }
}
