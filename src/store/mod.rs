//! Durable key-value persistence for session tokens.
//!
//! This module provides the `SessionStore` trait and its backends:
//! - `FileStore`: a JSON file under the platform cache directory
//! - `KeychainStore`: OS-level secure storage via keyring
//! - `MemoryStore`: in-process storage, used as a test double
//!
//! The store is an explicit dependency of `AuthService` rather than an
//! ambient global, so callers can inject doubles or run several instances.

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileStore;
pub use keychain::KeychainStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Well-known storage keys for session tokens.
pub mod keys {
    /// Key for the short-lived access token.
    pub const ACCESS_TOKEN: &str = "accessToken";

    /// Key for the longer-lived refresh token.
    pub const REFRESH_TOKEN: &str = "refreshToken";
}

/// Key-value persistence of opaque string entries.
///
/// Values round-trip exactly: no transformation, truncation, or encoding.
/// A missing key is a normal case (`None`), never an error.
pub trait SessionStore {
    /// Write a value under a key, silently overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value stored under a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Delete a key. No-op if absent.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove all entries.
    fn clear(&self) -> Result<()>;
}
