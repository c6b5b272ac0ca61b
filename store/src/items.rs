//! Item storage trait.

use crate::StoreError;
use reclaim_types::{ItemId, ItemKind, ItemRecord, NewItem};

/// Trait for storing item registrations.
///
/// Found and lost items are kept in separate tables selected by `kind`.
/// Implementations must be safe to share across request tasks.
pub trait ItemStore: Send + Sync {
    /// Persist a new registration with `verified = false` and return the
    /// allocated id. Ids are monotonically increasing per kind.
    fn insert(&self, kind: ItemKind, item: &NewItem) -> Result<ItemId, StoreError>;

    /// Flip the verified flag of an existing record to true.
    ///
    /// Returns `StoreError::NotFound` if no record with that id exists.
    /// Verifying an already-verified record is a no-op, not an error.
    fn set_verified(&self, kind: ItemKind, id: ItemId) -> Result<(), StoreError>;

    /// Fetch a single record.
    fn get(&self, kind: ItemKind, id: ItemId) -> Result<Option<ItemRecord>, StoreError>;

    /// All records with `verified = true`, in ascending id (insertion) order.
    ///
    /// Unverified records are never surfaced here, regardless of content.
    fn list_verified(&self, kind: ItemKind) -> Result<Vec<ItemRecord>, StoreError>;

    /// Total number of records of this kind, verified or not.
    fn item_count(&self, kind: ItemKind) -> Result<u64, StoreError>;
}
