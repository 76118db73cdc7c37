//! Model module: the internal shapes a stored secret arrives in.
//!
//! This module provides:
//! - `SecretSeries`, a secret's identity and lifecycle metadata (`series`)
//! - `SecretContent` and the `SecretSeriesAndContent` pairing (`content`)
//! - The flat `Secret` and its payload-free `SanitizedSecret` (`secret`)
//!
//! These records are produced by the storage layer; this crate only reads
//! them in order to project responses.

pub mod content;
pub mod secret;
pub mod series;

// Re-export the most commonly used items.
pub use content::{SecretContent, SecretSeriesAndContent};
pub use secret::{SanitizedSecret, Secret};
pub use series::SecretSeries;
