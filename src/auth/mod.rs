//! Login flag lookup.
//!
//! # Data Flow
//! ```text
//! Session collaborator writes "isLoggedIn" = "yes" | "no"
//!     → store.rs (memory or JSON file)
//!     → AuthFlag::from_store
//!     → Router::resolve (read-only)
//! ```
//!
//! The router never writes the flag; it is passed in explicitly on every
//! resolution instead of being looked up ambiently.

pub mod store;

use serde::Serialize;

pub use store::{FileStore, MemoryStore, SessionStore, StoreError};

/// Default key the login flag is persisted under.
pub const IS_LOGGED_IN: &str = "isLoggedIn";

/// Persisted value meaning "logged in".
pub const YES: &str = "yes";

/// Persisted value meaning "not logged in".
pub const NO: &str = "no";

/// Whether the user has logged in before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AuthFlag(bool);

impl AuthFlag {
    pub const LOGGED_IN: AuthFlag = AuthFlag(true);
    pub const LOGGED_OUT: AuthFlag = AuthFlag(false);

    /// Only the exact value `"yes"` counts as logged in.
    pub fn parse(value: &str) -> Self {
        Self(value == YES)
    }

    /// Read the flag stored under `key`. A missing key means logged out.
    pub fn from_store(store: &dyn SessionStore, key: &str) -> Self {
        store
            .get(key)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.0
    }

    /// The persisted representation of this flag.
    pub fn as_stored(&self) -> &'static str {
        if self.0 {
            YES
        } else {
            NO
        }
    }
}

impl From<bool> for AuthFlag {
    fn from(logged_in: bool) -> Self {
        Self(logged_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_only_accepts_yes() {
        assert!(AuthFlag::parse("yes").is_logged_in());
        assert!(!AuthFlag::parse("no").is_logged_in());
        assert!(!AuthFlag::parse("YES").is_logged_in());
        assert!(!AuthFlag::parse("true").is_logged_in());
        assert!(!AuthFlag::parse("").is_logged_in());
    }

    #[test]
    fn test_from_store() {
        let store = MemoryStore::new();
        assert_eq!(AuthFlag::from_store(&store, IS_LOGGED_IN), AuthFlag::LOGGED_OUT);

        store.set(IS_LOGGED_IN, YES);
        assert_eq!(AuthFlag::from_store(&store, IS_LOGGED_IN), AuthFlag::LOGGED_IN);

        store.set(IS_LOGGED_IN, NO);
        assert_eq!(AuthFlag::from_store(&store, IS_LOGGED_IN), AuthFlag::LOGGED_OUT);
    }

    #[test]
    fn test_as_stored_round_trips() {
        assert_eq!(AuthFlag::parse(AuthFlag::LOGGED_IN.as_stored()), AuthFlag::LOGGED_IN);
        assert_eq!(AuthFlag::parse(AuthFlag::LOGGED_OUT.as_stored()), AuthFlag::LOGGED_OUT);
    }
}
