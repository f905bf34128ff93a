//! Newtype IDs for type-safe identifiers.
//!
//! Product ids and category keys are both plain strings derived from asset
//! filenames; the newtypes keep them from being swapped by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Product identifier: the asset filename without its extension.
    ProductId
);
define_id!(
    /// Canonical category token taken from the filename prefix.
    CategoryKey
);

impl CategoryKey {
    /// Key used for assets whose filename has no separator.
    pub const MISC: &'static str = "misc";

    /// The fallback category key.
    pub fn misc() -> Self {
        Self::new(Self::MISC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("ocvit_inox");
        assert_eq!(id.as_str(), "ocvit_inox");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "bulong_m8".into();
        assert_eq!(id.as_str(), "bulong_m8");
    }

    #[test]
    fn test_id_ordering_is_lexicographic() {
        let mut ids = vec![ProductId::new("b"), ProductId::new("a_2"), ProductId::new("a")];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["a", "a_2", "b"]);
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&CategoryKey::misc()).unwrap();
        assert_eq!(json, "\"misc\"");
    }
}
