//! Core types for the reclaim lost-and-found registry.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: item kinds and identifiers, item records, and search queries.

pub mod item;
pub mod kind;
pub mod query;

pub use item::{ItemId, ItemRecord, NewItem};
pub use kind::ItemKind;
pub use query::SearchQuery;
