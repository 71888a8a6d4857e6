//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Players and quest instances are keyed by UUID v7 so records sort by
//! creation time on the sync backend. Catalog entries (goals, achievements,
//! quiz questions) use stable human-readable string ids instead.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a player profile.
    PlayerId
}

define_id! {
    /// Unique identifier for a generated quest instance.
    QuestId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_not_nil() {
        assert_ne!(PlayerId::new().into_inner(), Uuid::nil());
        assert_ne!(QuestId::new().into_inner(), Uuid::nil());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = QuestId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn id_serializes_as_bare_uuid() {
        let id = PlayerId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.into_inner()));
    }
}
