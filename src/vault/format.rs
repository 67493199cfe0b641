//! On-disk representation of the vault.
//!
//! The vault file is a single opaque AEAD blob:
//!
//! ```text
//! [ 12-byte nonce | ciphertext | 16-byte auth tag ]
//! ```
//!
//! The decrypted payload is a JSON array of `PasswordRecord`, in
//! insertion order.  There is no per-record persistence unit and no
//! plaintext header — everything but the nonce is covered by the tag.

use std::fs;
use std::path::Path;

use crate::errors::{Result, VaultError};

use super::record::PasswordRecord;

/// Serialize the ordered record list to its structured byte form.
pub fn serialize_records(records: &[PasswordRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec(records)
        .map_err(|e| VaultError::SerializationFailure(format!("records: {e}")))
}

/// Deserialize a decrypted payload back into the ordered record list.
pub fn deserialize_records(payload: &[u8]) -> Result<Vec<PasswordRecord>> {
    serde_json::from_slice(payload)
        .map_err(|e| VaultError::SerializationFailure(format!("records: {e}")))
}

/// Read the encrypted vault blob from disk.
pub fn read_blob(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(VaultError::VaultNotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Write the encrypted vault blob to disk **atomically**.
///
/// Writes to a temp file in the same directory, then renames it over
/// the target path so readers never see a half-written file.
pub fn write_blob(path: &Path, blob: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, blob)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Option<Vec<u8>> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

pub(crate) fn base64_encode_opt<S>(
    data: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match data {
        Some(bytes) => serializer.serialize_some(&BASE64.encode(bytes)),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn base64_decode_opt<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<u8>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(encoded) => BASE64
            .decode(&encoded)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
