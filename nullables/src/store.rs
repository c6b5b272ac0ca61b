//! Nullable store: thread-safe in-memory item storage.

use reclaim_store::{ItemStore, StoreError};
use reclaim_types::{ItemId, ItemKind, ItemRecord, NewItem};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// One kind's table: ordered rows plus the next id to hand out.
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, ItemRecord>,
}

impl Table {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// An in-memory item store.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullItemStore {
    found: Mutex<Table>,
    lost: Mutex<Table>,
}

impl NullItemStore {
    pub fn new() -> Self {
        Self {
            found: Mutex::new(Table::new()),
            lost: Mutex::new(Table::new()),
        }
    }

    fn table(&self, kind: ItemKind) -> &Mutex<Table> {
        match kind {
            ItemKind::Found => &self.found,
            ItemKind::Lost => &self.lost,
        }
    }
}

impl Default for NullItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for NullItemStore {
    fn insert(&self, kind: ItemKind, item: &NewItem) -> Result<ItemId, StoreError> {
        let mut table = self.table(kind).lock().unwrap();
        let id = ItemId::new(table.next_id);
        table.next_id += 1;
        table.rows.insert(id.as_u64(), ItemRecord::from_new(id, item));
        Ok(id)
    }

    fn set_verified(&self, kind: ItemKind, id: ItemId) -> Result<(), StoreError> {
        let mut table = self.table(kind).lock().unwrap();
        match table.rows.get_mut(&id.as_u64()) {
            Some(record) => {
                record.verified = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!(
                "{} item {id}",
                kind.as_str()
            ))),
        }
    }

    fn get(&self, kind: ItemKind, id: ItemId) -> Result<Option<ItemRecord>, StoreError> {
        Ok(self
            .table(kind)
            .lock()
            .unwrap()
            .rows
            .get(&id.as_u64())
            .cloned())
    }

    fn list_verified(&self, kind: ItemKind) -> Result<Vec<ItemRecord>, StoreError> {
        // BTreeMap iteration is id order, i.e. insertion order.
        Ok(self
            .table(kind)
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|r| r.verified)
            .cloned()
            .collect())
    }

    fn item_count(&self, kind: ItemKind) -> Result<u64, StoreError> {
        Ok(self.table(kind).lock().unwrap().rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str) -> NewItem {
        NewItem {
            email: "finder@example.com".to_string(),
            item_name: name.to_string(),
            color: "Black".to_string(),
            brand: None,
            location: "cafeteria".to_string(),
        }
    }

    #[test]
    fn insert_get_roundtrip() {
        let store = NullItemStore::new();
        let id = store.insert(ItemKind::Found, &new_item("Phone")).unwrap();
        let record = store.get(ItemKind::Found, id).unwrap().unwrap();
        assert_eq!(record.item_name, "Phone");
        assert!(!record.verified);
    }

    #[test]
    fn kinds_have_independent_counters() {
        let store = NullItemStore::new();
        let found = store.insert(ItemKind::Found, &new_item("a")).unwrap();
        let lost = store.insert(ItemKind::Lost, &new_item("b")).unwrap();
        assert_eq!(found.as_u64(), 1);
        assert_eq!(lost.as_u64(), 1);
    }

    #[test]
    fn list_verified_hides_unverified_rows() {
        let store = NullItemStore::new();
        let a = store.insert(ItemKind::Found, &new_item("visible")).unwrap();
        store.insert(ItemKind::Found, &new_item("hidden")).unwrap();
        store.set_verified(ItemKind::Found, a).unwrap();

        let listed = store.list_verified(ItemKind::Found).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item_name, "visible");
    }

    #[test]
    fn set_verified_on_missing_row_errors() {
        let store = NullItemStore::new();
        assert!(matches!(
            store.set_verified(ItemKind::Lost, ItemId::new(5)),
            Err(StoreError::NotFound(_))
        ));
    }
}
