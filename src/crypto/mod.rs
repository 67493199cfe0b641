//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - SHA-256 hex digests for plaintext equality checks (`hash`)
//! - The vault's symmetric key and its lifecycle (`keys`)

pub mod encryption;
pub mod hash;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, KeyManager, ...};
pub use encryption::{decrypt, encrypt, NONCE_LEN, TAG_LEN};
pub use hash::sha256_hex;
pub use keys::{KeyManager, SymmetricKey, KEY_LEN};
