//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a RentalId where a BikeId is expected. All catalog IDs
//! are seeded statically, so there is no generation scheme; IDs are
//! constructed from their string form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
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

// Define all ID types
define_id!(BikeId);
define_id!(PartId);
define_id!(RentalId);
define_id!(LaunchId);
define_id!(ItemId);

impl From<&BikeId> for ItemId {
    fn from(id: &BikeId) -> Self {
        Self(id.0.clone())
    }
}

impl From<&PartId> for ItemId {
    fn from(id: &PartId) -> Self {
        Self(id.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = BikeId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_from_string() {
        let id: PartId = "engine-1".into();
        assert_eq!(id.as_str(), "engine-1");
    }

    #[test]
    fn test_id_display() {
        let id = RentalId::new("rental-7");
        assert_eq!(format!("{}", id), "rental-7");
    }

    #[test]
    fn test_id_equality() {
        let id1 = BikeId::new("same");
        let id2 = BikeId::new("same");
        let id3 = BikeId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_item_id_from_catalog_ids() {
        let bike_id = BikeId::new("12");
        let part_id = PartId::new("brake-2");

        assert_eq!(ItemId::from(&bike_id).as_str(), "12");
        assert_eq!(ItemId::from(&part_id).as_str(), "brake-2");
    }
}
