//! Versioned secret content and its pairing with a series.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::series::SecretSeries;

/// One stored version of a secret. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretContent {
    /// Version id (unique across all content rows).
    pub id: i64,

    pub series_id: i64,

    /// The stored payload, base64 text.
    pub encrypted_content: String,

    /// Checksum of the payload.
    pub hmac: String,

    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Expiry in epoch seconds, 0 when the version never expires.
    #[serde(default)]
    pub expiry: i64,
}

/// "This secret at this version."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretSeriesAndContent {
    pub series: SecretSeries,
    pub content: SecretContent,
}

impl SecretSeriesAndContent {
    pub fn new(series: SecretSeries, content: SecretContent) -> Self {
        Self { series, content }
    }
}
