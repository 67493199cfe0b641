//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` is the canonical ordered collection of password
//! records, kept in sync with a single encrypted file on disk.  Every
//! mutation rewrites the whole file — a deliberate trade of write
//! amplification for simplicity in a small personal vault.
//!
//! Load and decrypt failures surface as typed errors; the store never
//! silently falls back to an empty collection.  `open_or_reset` is the
//! explicit opt-in recovery path.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::crypto::{decrypt, encrypt, sha256_hex, KeyManager};
use crate::errors::{Result, VaultError};
use crate::generator::{strength, Strength};

use super::format;
use super::record::{Category, PasswordRecord};

/// Placeholder secret given to the seeded example records.
const SAMPLE_SECRET: &str = "Password123!";

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to manage records.  Designed for single-threaded,
/// synchronous use; mutations must be serialized by the caller.
pub struct VaultStore {
    /// Path to the encrypted vault file on disk.
    path: PathBuf,

    /// Ordered in-memory collection, insertion order preserved.
    records: Vec<PasswordRecord>,

    /// Owns the symmetric key for the life of the store.
    keys: KeyManager,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `path`.
    ///
    /// If the file does not exist, a small set of example records is
    /// seeded and persisted.  If it exists, it is decrypted as a single
    /// blob and deserialized; failures propagate as `IntegrityFailure`
    /// or `SerializationFailure` — the caller decides what to do.
    pub fn open(path: &Path, keys: KeyManager) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            records: Vec::new(),
            keys,
        };

        if store.path.exists() {
            store.records = store.load_records()?;
        } else {
            store.seed_sample_records()?;
        }

        Ok(store)
    }

    /// Open the vault, discarding undecryptable or malformed contents.
    ///
    /// Same as `open`, except an `IntegrityFailure` or
    /// `SerializationFailure` on load resets the vault to an empty
    /// collection and persists it.  IO errors still propagate.  The
    /// previous ciphertext is unrecoverable once this runs.
    pub fn open_or_reset(path: &Path, keys: KeyManager) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            records: Vec::new(),
            keys,
        };

        if !store.path.exists() {
            store.seed_sample_records()?;
            return Ok(store);
        }

        match store.load_records() {
            Ok(records) => store.records = records,
            Err(VaultError::IntegrityFailure) | Err(VaultError::SerializationFailure(_)) => {
                store.records.clear();
                store.save()?;
            }
            Err(e) => return Err(e),
        }

        Ok(store)
    }

    /// Decrypt and deserialize the vault file.
    fn load_records(&self) -> Result<Vec<PasswordRecord>> {
        let blob = format::read_blob(&self.path)?;
        let mut payload = decrypt(self.keys.key().as_bytes(), &blob)?;
        let records = format::deserialize_records(&payload);
        payload.zeroize();
        records
    }

    /// First-run seed: a few example records, each with an individually
    /// encrypted placeholder secret.
    fn seed_sample_records(&mut self) -> Result<()> {
        let samples = [
            ("Apple ID", "user@example.com", "apple.com", Category::Personal),
            ("Gmail", "user@gmail.com", "gmail.com", Category::Personal),
            ("GitHub", "developer", "github.com", Category::Work),
        ];

        for (title, username, website, category) in samples {
            let mut record = PasswordRecord::new(title, username, website, category);
            record.encrypted_secret =
                Some(encrypt(self.keys.key().as_bytes(), SAMPLE_SECRET.as_bytes())?);
            self.records.push(record);
        }

        self.save()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the whole collection, encrypt it as one blob, and
    /// overwrite the vault file atomically.  O(n) per mutation.
    fn save(&self) -> Result<()> {
        let mut payload = format::serialize_records(&self.records)?;
        let blob = encrypt(self.keys.key().as_bytes(), &payload);
        payload.zeroize();

        format::write_blob(&self.path, &blob?)
    }

    // ------------------------------------------------------------------
    // CRUD
    // ------------------------------------------------------------------

    /// Append a record to the end of the collection and persist.
    pub fn add(&mut self, record: PasswordRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Replace the record with a matching id and persist.
    ///
    /// Bumps `updated_at`.  A missing id is an explicit `NotFound`.
    pub fn update(&mut self, mut record: PasswordRecord) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == record.id)
            .ok_or(VaultError::NotFound(record.id))?;

        record.updated_at = Utc::now();
        self.records[index] = record;
        self.save()
    }

    /// Remove the record with the given id and persist.
    pub fn delete(&mut self, id: &Uuid) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != *id);
        if self.records.len() == before {
            return Err(VaultError::NotFound(*id));
        }
        self.save()
    }

    /// Remove every record and persist the empty vault.
    pub fn delete_all(&mut self) -> Result<()> {
        self.records.clear();
        self.save()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &Uuid) -> Option<&PasswordRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// The full ordered collection.
    pub fn records(&self) -> &[PasswordRecord] {
        &self.records
    }

    // ------------------------------------------------------------------
    // Secret access
    // ------------------------------------------------------------------

    /// Encrypt `plaintext` and store it on the record with the given
    /// id, bumping `updated_at`.
    pub fn set_secret(&mut self, id: &Uuid, plaintext: &str) -> Result<()> {
        let blob = encrypt(self.keys.key().as_bytes(), plaintext.as_bytes())?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(VaultError::NotFound(*id))?;

        record.encrypted_secret = Some(blob);
        record.updated_at = Utc::now();
        self.save()
    }

    /// Decrypt and return the record's secret.
    ///
    /// The plaintext exists only in the returned value; on a UTF-8
    /// conversion failure the buffer is zeroized before the error is
    /// returned.
    pub fn reveal_secret(&self, id: &Uuid) -> Result<String> {
        let record = self.get(id).ok_or(VaultError::NotFound(*id))?;
        let blob = record
            .encrypted_secret
            .as_deref()
            .ok_or(VaultError::NoSecret(*id))?;

        let plaintext_bytes = decrypt(self.keys.key().as_bytes(), blob)?;

        String::from_utf8(plaintext_bytes).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            VaultError::SerializationFailure("secret is not valid UTF-8".to_string())
        })
    }

    /// Record that the secret was just used (`last_used_at = now`).
    pub fn touch(&mut self, id: &Uuid) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(VaultError::NotFound(*id))?;

        record.last_used_at = Some(Utc::now());
        self.save()
    }

    // ------------------------------------------------------------------
    // Search and filter
    // ------------------------------------------------------------------

    /// Case-insensitive substring search over title, username, website,
    /// and notes.  An empty query returns the full collection; relative
    /// order is always preserved.
    pub fn search(&self, query: &str) -> Vec<&PasswordRecord> {
        if query.is_empty() {
            return self.records.iter().collect();
        }

        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.username.to_lowercase().contains(&needle)
                    || r.website.to_lowercase().contains(&needle)
                    || r.notes.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Records carrying the given category tag, in original order.
    pub fn by_category(&self, category: Category) -> Vec<&PasswordRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Favorite records, in original order.
    pub fn favorites(&self) -> Vec<&PasswordRecord> {
        self.records.iter().filter(|r| r.is_favorite).collect()
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Number of records.  O(1).
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Number of records whose secret classifies as weak.
    ///
    /// Decrypts every stored secret — O(n) full-decryption pass, not
    /// for hot paths.  Records whose secret is missing or fails to
    /// decrypt are skipped rather than failing the aggregate.
    pub fn weak_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| {
                let Some(blob) = r.encrypted_secret.as_deref() else {
                    return false;
                };
                let Ok(mut plaintext) = decrypt(self.keys.key().as_bytes(), blob) else {
                    return false;
                };
                let is_weak = std::str::from_utf8(&plaintext)
                    .map(|s| strength(s) == Strength::Weak)
                    .unwrap_or(false);
                plaintext.zeroize();
                is_weak
            })
            .count()
    }

    /// Number of records sharing a secret with an earlier record.
    ///
    /// Defined as decryptable total minus distinct plaintext count.
    /// Plaintexts are compared via their SHA-256 digests so the full
    /// set of decrypted secrets never sits in memory together.  Same
    /// cost and skip behavior as `weak_count`.
    pub fn duplicate_count(&self) -> usize {
        let mut total = 0usize;
        let mut distinct = std::collections::HashSet::new();

        for record in &self.records {
            let Some(blob) = record.encrypted_secret.as_deref() else {
                continue;
            };
            let Ok(mut plaintext) = decrypt(self.keys.key().as_bytes(), blob) else {
                continue;
            };
            if let Ok(s) = std::str::from_utf8(&plaintext) {
                total += 1;
                distinct.insert(sha256_hex(s));
            }
            plaintext.zeroize();
        }

        total - distinct.len()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `false` if the symmetric key could not be written to the
    /// protected store and only exists for this session.
    pub fn key_persisted(&self) -> bool {
        self.keys.persisted()
    }
}
