//! The vault's single symmetric key and its lifecycle.
//!
//! `KeyManager` owns the one 256-bit key for the life of the process.
//! The key material lives in the OS protected store (keyring); it is
//! created once, cryptographically random, and retrieved verbatim on
//! every later run.  The vault file never contains the key.

use rand::TryRngCore;
use zeroize::Zeroize;

use crate::errors::{Result, VaultError};
use crate::keystore::ProtectedStore;

/// Length of the symmetric key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// A wrapper around the 32-byte vault key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_LEN],
}

impl SymmetricKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate fresh key material from the OS CSPRNG.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| VaultError::KeyUnavailable(format!("OS RNG failure: {e}")))?;
        Ok(Self { bytes })
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Owns the vault's symmetric key for the life of the process.
///
/// Construct once at startup; `key()` always returns the same material
/// afterwards.  `CryptoEngine`-level functions borrow the key per call
/// and never keep a copy.
pub struct KeyManager {
    key: SymmetricKey,
    persisted: bool,
}

impl KeyManager {
    /// Fetch the key from the protected store, or create it.
    ///
    /// If no key exists under `account`, a fresh one is generated and
    /// written to the store.  If that write fails, the key is still
    /// returned for the current session but will not survive a process
    /// restart; `persisted()` reports `false` so the caller can warn.
    pub fn new(store: &dyn ProtectedStore, account: &str) -> Result<Self> {
        if let Some(mut raw) = store.get(account)? {
            if raw.len() != KEY_LEN {
                raw.zeroize();
                return Err(VaultError::KeyUnavailable(format!(
                    "stored key has unexpected length {} (expected {KEY_LEN})",
                    raw.len()
                )));
            }
            let mut bytes = [0u8; KEY_LEN];
            bytes.copy_from_slice(&raw);
            raw.zeroize();
            let key = SymmetricKey::new(bytes);
            bytes.zeroize();
            return Ok(Self {
                key,
                persisted: true,
            });
        }

        let key = SymmetricKey::generate()?;
        let persisted = store.set(account, key.as_bytes()).is_ok();

        Ok(Self { key, persisted })
    }

    /// The process-lifetime key material.
    pub fn key(&self) -> &SymmetricKey {
        &self.key
    }

    /// `false` if the key only exists in memory because the protected
    /// store rejected the write — the vault becomes unreadable after a
    /// restart in that case.
    pub fn persisted(&self) -> bool {
        self.persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystore::MemoryStore;

    /// A store whose writes always fail, for the key-loss path.
    struct ReadOnlyStore;

    impl ProtectedStore for ReadOnlyStore {
        fn get(&self, _account: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }
        fn set(&self, _account: &str, _value: &[u8]) -> Result<()> {
            Err(VaultError::KeystoreError("store is read-only".into()))
        }
        fn delete(&self, _account: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn creates_and_persists_a_key_on_first_use() {
        let store = MemoryStore::default();
        let manager = KeyManager::new(&store, "vault-key").unwrap();

        assert!(manager.persisted());
        let stored = store.get("vault-key").unwrap().unwrap();
        assert_eq!(stored.as_slice(), manager.key().as_bytes());
    }

    #[test]
    fn returns_existing_key_verbatim() {
        let store = MemoryStore::default();
        let material = [42u8; KEY_LEN];
        store.set("vault-key", &material).unwrap();

        let manager = KeyManager::new(&store, "vault-key").unwrap();
        assert_eq!(manager.key().as_bytes(), &material);
    }

    #[test]
    fn repeated_construction_yields_same_material() {
        let store = MemoryStore::default();
        let first = KeyManager::new(&store, "vault-key").unwrap();
        let second = KeyManager::new(&store, "vault-key").unwrap();
        assert_eq!(first.key().as_bytes(), second.key().as_bytes());
    }

    #[test]
    fn write_failure_still_yields_a_session_key() {
        let manager = KeyManager::new(&ReadOnlyStore, "vault-key").unwrap();
        assert!(!manager.persisted());
        assert_ne!(manager.key().as_bytes(), &[0u8; KEY_LEN]);
    }

    #[test]
    fn rejects_malformed_stored_material() {
        let store = MemoryStore::default();
        store.set("vault-key", &[1u8; 16]).unwrap();

        assert!(matches!(
            KeyManager::new(&store, "vault-key"),
            Err(VaultError::KeyUnavailable(_))
        ));
    }
}
