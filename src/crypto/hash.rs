//! One-way hashing for plaintext equality checks.
//!
//! Used by the duplicate-password statistic so decrypted secrets can be
//! compared without holding every plaintext in memory at once.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `input`, rendered as a lowercase hex string.
///
/// Deterministic and fixed-length (64 hex chars).  Only ever used for
/// equality comparison — never reversible.
pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        // NIST test vector for "abc".
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn deterministic_and_fixed_length() {
        assert_eq!(sha256_hex("hunter2"), sha256_hex("hunter2"));
        assert_ne!(sha256_hex("hunter2"), sha256_hex("hunter3"));
        assert_eq!(sha256_hex("").len(), 64);
    }
}
