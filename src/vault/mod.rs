//! Vault module — encrypted record storage.
//!
//! This module provides:
//! - `PasswordRecord` and the closed `Category` set (`record`)
//! - The single-blob encrypted file format (`format`)
//! - The high-level `VaultStore` with CRUD, search, and statistics
//!   (`store`)

pub mod format;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{Category, PasswordRecord};
pub use store::VaultStore;
