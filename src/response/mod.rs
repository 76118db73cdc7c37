//! Response module: canonical wire views built from internal secret shapes.
//!
//! This module provides:
//! - `SecretDetail` and its builder, projected from any secret shape (`detail`)
//! - `BatchSecretContents` and its builder, folding many lookups (`contents`)

pub mod contents;
pub mod detail;

// Re-export the most commonly used items.
pub use contents::{BatchSecretContents, BatchSecretContentsBuilder};
pub use detail::{SecretDetail, SecretDetailBuilder};
