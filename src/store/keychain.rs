//! Keychain-backed session store.
//!
//! Stores each entry as an OS keychain credential (service name + key),
//! for installs where tokens should not sit in a plain file. Keychains
//! cannot enumerate entries, so `clear` removes the well-known token keys.

use anyhow::{Context, Result};
use keyring::Entry;

use super::{keys, SessionStore};

const SERVICE_NAME: &str = "tokencache";

pub struct KeychainStore {
    service: String,
}

impl Default for KeychainStore {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl KeychainStore {
    /// Create a store scoped to a keychain service name. Separate service
    /// names give separate sessions (e.g. per environment).
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service, key).context("Failed to create keyring entry")
    }
}

impl SessionStore for KeychainStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entry(key)?
            .set_password(value)
            .context("Failed to store value in keychain")
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read value from keychain"),
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete value from keychain"),
        }
    }

    fn clear(&self) -> Result<()> {
        self.remove(keys::ACCESS_TOKEN)?;
        self.remove(keys::REFRESH_TOKEN)
    }
}
