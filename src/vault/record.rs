//! The password record type and its closed category set.
//!
//! `encrypted_secret` holds the AEAD blob produced by the crypto layer
//! and uses custom serde helpers so it serializes as a base64 string in
//! JSON rather than a raw byte array.  The plaintext secret never lives
//! on the record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format::{base64_decode_opt, base64_encode_opt};
use crate::errors::VaultError;

/// Closed set of record categories.
///
/// Pure domain tags — display names, icons, and colors belong to the
/// presentation layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Work,
    Finance,
    Social,
    Entertainment,
    Shopping,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 7] = [
        Category::Personal,
        Category::Work,
        Category::Finance,
        Category::Social,
        Category::Entertainment,
        Category::Shopping,
        Category::Other,
    ];

    /// The stable lowercase tag used on disk and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Finance => "finance",
            Category::Social => "social",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                VaultError::CommandFailed(format!(
                    "unknown category '{s}' — expected one of: personal, work, finance, social, entertainment, shopping, other"
                ))
            })
    }
}

/// A single titled credential stored in the vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Globally unique, immutable once created.
    pub id: Uuid,

    /// Human-readable title (e.g. "GitHub").
    pub title: String,

    /// Login name for the credential.
    pub username: String,

    /// The encrypted secret blob (nonce || ciphertext || tag), absent
    /// until a secret is first assigned.  Base64 in JSON.
    #[serde(
        default,
        serialize_with = "base64_encode_opt",
        deserialize_with = "base64_decode_opt"
    )]
    pub encrypted_secret: Option<Vec<u8>>,

    /// Associated website or service URL.
    pub website: String,

    /// Free-form notes.
    pub notes: String,

    /// Which of the seven fixed tags this record carries.
    pub category: Category,

    /// When this record was first created.
    pub created_at: DateTime<Utc>,

    /// When this record was last modified.
    pub updated_at: DateTime<Utc>,

    /// When the secret was last revealed, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,

    /// Pinned to the favorites filter.
    pub is_favorite: bool,
}

impl PasswordRecord {
    /// Create a record with a fresh id and current timestamps.
    ///
    /// The secret is assigned separately through the store so the
    /// plaintext only ever crosses the crypto layer.
    pub fn new(title: &str, username: &str, website: &str, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            username: username.to_string(),
            encrypted_secret: None,
            website: website.to_string(),
            notes: String::new(),
            category,
            created_at: now,
            updated_at: now,
            last_used_at: None,
            is_favorite: false,
        }
    }
}
