//! Newtype IDs for type-safe identifiers.
//!
//! Keeps product ids, slugs and session ids from being mixed up even
//! though all three are strings underneath.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog-unique product identifier.
    ProductId
);
define_id!(
    /// URL key of a product (`/catalogo/{slug}`).
    Slug
);
define_id!(
    /// Identifies one catalog browsing session in logs.
    SessionId
);

impl SessionId {
    /// Generate a new session id.
    pub fn generate() -> Self {
        Self(generate_id())
    }
}

/// Generate a unique ID from the clock and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("vela-lavanda");
        assert_eq!(id.as_str(), "vela-lavanda");
        assert_eq!(format!("{}", id), "vela-lavanda");
    }

    #[test]
    fn test_session_id_generation() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_slug_borrows_as_str() {
        let mut index: HashMap<Slug, usize> = HashMap::new();
        index.insert(Slug::from("vela-vainilla"), 1);
        assert_eq!(index.get("vela-vainilla"), Some(&1));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&Slug::new("vela-citronela")).unwrap();
        assert_eq!(json, "\"vela-citronela\"");
    }
}
