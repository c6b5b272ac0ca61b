//! Item records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an item record, allocated by the store on insert.
///
/// Ids are monotonically increasing per kind, so iterating a table in id
/// order is insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fields supplied when registering an item.
///
/// `brand` is the only optional field; the HTTP boundary rejects requests
/// missing any of the others before this struct is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// Contact address of the person registering the item. The verification
    /// link is mailed here.
    pub email: String,
    pub item_name: String,
    pub color: String,
    pub brand: Option<String>,
    pub location: String,
}

/// A stored item record.
///
/// `verified` starts false and flips to true exactly once, when the
/// registration's verification token is consumed. Only verified records are
/// ever surfaced to search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub email: String,
    pub item_name: String,
    pub color: String,
    pub brand: Option<String>,
    pub location: String,
    pub verified: bool,
}

impl ItemRecord {
    /// Build the record stored for a fresh, unverified registration.
    pub fn from_new(id: ItemId, new: &NewItem) -> Self {
        Self {
            id,
            email: new.email.clone(),
            item_name: new.item_name.clone(),
            color: new.color.clone(),
            brand: new.brand.clone(),
            location: new.location.clone(),
            verified: false,
        }
    }
}
