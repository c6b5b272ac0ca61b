//! Item kind: whether a record describes a found or a lost item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which registry a record belongs to.
///
/// Found and lost items live in separate tables; a verification token
/// carries the kind so consuming it flips the flag in the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// An item someone found and registered for its owner to claim.
    Found,
    /// An item someone lost and registered in the hope it turns up.
    Lost,
}

impl ItemKind {
    /// Short lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Lost => "lost",
        }
    }

    /// Name of the logical table/database holding records of this kind.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Found => "found_items",
            Self::Lost => "lost_items",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemKind::Found).unwrap(), "\"found\"");
        assert_eq!(serde_json::to_string(&ItemKind::Lost).unwrap(), "\"lost\"");
    }

    #[test]
    fn table_names_are_distinct() {
        assert_ne!(ItemKind::Found.table_name(), ItemKind::Lost.table_name());
    }
}
