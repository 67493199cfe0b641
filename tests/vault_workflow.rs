//! End-to-end vault workflows through the library API.
//!
//! Uses the in-memory protected store so no OS keyring is required;
//! vault files live in per-test temp directories.

use passvault::crypto::KeyManager;
use passvault::errors::VaultError;
use passvault::keystore::MemoryStore;
use passvault::vault::{Category, PasswordRecord, VaultStore};
use tempfile::TempDir;

const ACCOUNT: &str = "encryption-key";

fn vault_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("passwords.encrypted")
}

fn open(dir: &TempDir, keystore: &MemoryStore) -> VaultStore {
    let keys = KeyManager::new(keystore, ACCOUNT).unwrap();
    VaultStore::open(&vault_path(dir), keys).unwrap()
}

// ---------------------------------------------------------------------------
// Multi-step workflow: seed → add → search → edit → stats → delete → reopen
// ---------------------------------------------------------------------------

#[test]
fn full_workflow_add_search_edit_delete_reopen() {
    let dir = TempDir::new().unwrap();
    let keystore = MemoryStore::default();

    // 1. First open seeds example records.
    let mut store = open(&dir, &keystore);
    assert_eq!(store.count(), 3);

    // 2. Add a record and give it a secret.
    let record = PasswordRecord::new("Cloud Drive", "storage-user", "drive.test", Category::Work);
    let id = record.id;
    store.add(record).unwrap();
    store.set_secret(&id, "N0t-Gu3ssable!Here").unwrap();
    assert_eq!(store.count(), 4);

    // 3. Search finds it (case-insensitive, any field).
    let hits = store.search("cloud");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);

    // 4. Edit: retitle and favorite it.
    let mut updated = store.get(&id).unwrap().clone();
    updated.title = "Cloud Drive (work)".into();
    updated.is_favorite = true;
    store.update(updated).unwrap();
    assert_eq!(store.favorites().len(), 1);

    // 5. Statistics see through the encryption.
    assert_eq!(store.reveal_secret(&id).unwrap(), "N0t-Gu3ssable!Here");
    assert_eq!(store.weak_count(), 0);
    // Seeded records share one placeholder secret: 3 decryptable, 1 distinct.
    assert_eq!(store.duplicate_count(), 2);

    // 6. Delete and verify NotFound afterwards.
    store.delete(&id).unwrap();
    assert!(matches!(
        store.reveal_secret(&id),
        Err(VaultError::NotFound(_))
    ));

    // 7. Reopen from disk with the same keystore and verify persistence.
    drop(store);
    let reopened = open(&dir, &keystore);
    assert_eq!(reopened.count(), 3);
    assert!(reopened.search("cloud").is_empty());
}

// ---------------------------------------------------------------------------
// Failure semantics: wrong key, corruption, explicit recovery
// ---------------------------------------------------------------------------

#[test]
fn wrong_key_and_corruption_fail_closed() {
    let dir = TempDir::new().unwrap();
    let keystore = MemoryStore::default();

    {
        let mut store = open(&dir, &keystore);
        let record = PasswordRecord::new("Only", "", "", Category::Other);
        store.add(record).unwrap();
    }

    // Wrong key: a different keystore generates different material.
    let stranger = MemoryStore::default();
    let keys = KeyManager::new(&stranger, ACCOUNT).unwrap();
    assert!(matches!(
        VaultStore::open(&vault_path(&dir), keys),
        Err(VaultError::IntegrityFailure)
    ));

    // Corruption: a single flipped bit is never decrypted.
    let path = vault_path(&dir);
    let mut blob = std::fs::read(&path).unwrap();
    blob[20] ^= 0x80;
    std::fs::write(&path, &blob).unwrap();

    let keys = KeyManager::new(&keystore, ACCOUNT).unwrap();
    assert!(matches!(
        VaultStore::open(&path, keys),
        Err(VaultError::IntegrityFailure)
    ));

    // Recovery is opt-in and yields an empty vault, never fabricated data.
    let keys = KeyManager::new(&keystore, ACCOUNT).unwrap();
    let recovered = VaultStore::open_or_reset(&path, keys).unwrap();
    assert_eq!(recovered.count(), 0);
}

// ---------------------------------------------------------------------------
// Larger vault: order stability and statistics cost model sanity
// ---------------------------------------------------------------------------

#[test]
fn hundred_record_vault_keeps_insertion_order() {
    let dir = TempDir::new().unwrap();
    let keystore = MemoryStore::default();

    let mut store = open(&dir, &keystore);
    store.delete_all().unwrap();

    let mut ids = Vec::new();
    for i in 0..100 {
        let record = PasswordRecord::new(&format!("site-{i:03}"), "u", "w", Category::Other);
        ids.push(record.id);
        store.add(record).unwrap();
        if i % 2 == 0 {
            store.set_secret(&ids[i], &format!("shared-secret-{}", i % 5)).unwrap();
        }
    }

    drop(store);
    let store = open(&dir, &keystore);
    let reloaded: Vec<_> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(reloaded, ids);

    // 50 records carry secrets drawn from 5 distinct values.
    assert_eq!(store.duplicate_count(), 45);
}
