//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.  There is no associated data; the auth tag alone
//! covers integrity.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext and tag
/// (nonce || ciphertext || tag).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext (the tag is appended).
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a blob that was produced by `encrypt`.
///
/// Expects the first 12 bytes to be the nonce, followed by the
/// ciphertext and the 16-byte tag.  Any bit-level corruption,
/// truncation, or use of the wrong key fails closed with
/// `IntegrityFailure` — no partial plaintext is ever returned.
pub fn decrypt(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    // A valid blob holds at least a nonce and a tag.
    if blob.len() < NONCE_LEN + TAG_LEN {
        return Err(VaultError::IntegrityFailure);
    }

    // Split nonce from ciphertext + tag.
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| VaultError::IntegrityFailure)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| VaultError::IntegrityFailure)?;

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> [u8; 32] {
        [7u8; 32]
    }

    #[test]
    fn roundtrip_restores_plaintext() {
        let key = test_key();
        for payload in [
            &b""[..],
            &b"a"[..],
            &b"hello vault"[..],
            &[0u8; 1024][..],
        ] {
            let blob = encrypt(&key, payload).unwrap();
            assert_eq!(decrypt(&key, &blob).unwrap(), payload);
        }
    }

    #[test]
    fn fresh_nonce_per_call() {
        let key = test_key();
        let a = encrypt(&key, b"same input").unwrap();
        let b = encrypt(&key, b"same input").unwrap();
        assert_ne!(a, b);
        assert_ne!(&a[..NONCE_LEN], &b[..NONCE_LEN]);
    }

    #[test]
    fn blob_layout_has_nonce_and_tag_overhead() {
        let key = test_key();
        let blob = encrypt(&key, b"abc").unwrap();
        assert_eq!(blob.len(), NONCE_LEN + 3 + TAG_LEN);
    }

    #[test]
    fn any_single_bit_flip_is_detected() {
        let key = test_key();
        let blob = encrypt(&key, b"tamper target").unwrap();

        for byte_idx in 0..blob.len() {
            for bit in 0..8 {
                let mut tampered = blob.clone();
                tampered[byte_idx] ^= 1 << bit;
                match decrypt(&key, &tampered) {
                    Err(VaultError::IntegrityFailure) => {}
                    other => panic!(
                        "bit {bit} of byte {byte_idx}: expected IntegrityFailure, got {other:?}"
                    ),
                }
            }
        }
    }

    #[test]
    fn truncated_blob_fails_closed() {
        let key = test_key();
        let blob = encrypt(&key, b"short").unwrap();

        for len in 0..blob.len() {
            assert!(matches!(
                decrypt(&key, &blob[..len]),
                Err(VaultError::IntegrityFailure)
            ));
        }
    }

    #[test]
    fn wrong_key_fails_closed() {
        let blob = encrypt(&test_key(), b"secret").unwrap();
        let wrong = [8u8; 32];
        assert!(matches!(
            decrypt(&wrong, &blob),
            Err(VaultError::IntegrityFailure)
        ));
    }
}
