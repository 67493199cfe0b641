//! Protected key-value storage for the vault's symmetric key.
//!
//! The real implementation sits on the operating system's secure
//! credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! The store holds raw key bytes, never the vault contents.  Access is
//! gated by the device-unlock state the platform enforces; that gate is
//! treated as a precondition here, not re-checked.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::{Result, VaultError};

/// Key-value interface over a protected secret store.
///
/// `get` returns `None` (not an error) when no value exists, so callers
/// can distinguish "first run" from "store unreachable".
pub trait ProtectedStore {
    fn get(&self, account: &str) -> Result<Option<Vec<u8>>>;
    fn set(&self, account: &str, value: &[u8]) -> Result<()>;
    fn delete(&self, account: &str) -> Result<()>;
}

/// Protected store backed by the OS keyring.
pub struct OsProtectedStore {
    service: String,
}

impl OsProtectedStore {
    /// Create a store scoped to a keyring service name.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, account: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, account)
            .map_err(|e| VaultError::KeystoreError(format!("failed to create keyring entry: {e}")))
    }
}

impl ProtectedStore for OsProtectedStore {
    fn get(&self, account: &str) -> Result<Option<Vec<u8>>> {
        match self.entry(account)?.get_secret() {
            Ok(bytes) => Ok(Some(bytes)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(VaultError::KeystoreError(format!(
                "failed to read from keyring: {e}"
            ))),
        }
    }

    fn set(&self, account: &str, value: &[u8]) -> Result<()> {
        // set_secret overwrites any prior value for the account.
        self.entry(account)?.set_secret(value).map_err(|e| {
            VaultError::KeystoreError(format!("failed to store key in keyring: {e}"))
        })
    }

    fn delete(&self, account: &str) -> Result<()> {
        match self.entry(account)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
            Err(e) => Err(VaultError::KeystoreError(format!(
                "failed to delete from keyring: {e}"
            ))),
        }
    }
}

/// In-memory protected store.
///
/// No persistence and no OS dependency; used by tests and available to
/// embedders that manage key material themselves.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl ProtectedStore for MemoryStore {
    fn get(&self, account: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(account).cloned())
    }

    fn set(&self, account: &str, value: &[u8]) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(account.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<()> {
        self.entries.borrow_mut().remove(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_delete() {
        let store = MemoryStore::default();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", b"material").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"material");

        // Overwrite replaces the prior value.
        store.set("k", b"newer").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"newer");

        store.delete("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Deleting a missing entry is not an error.
        store.delete("k").unwrap();
    }
}
