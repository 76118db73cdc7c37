//! Flat secret records.
//!
//! A `Secret` is fully hydrated: series metadata, the current version's
//! metadata and the payload itself.  A `SanitizedSecret` carries the same
//! metadata with the payload stripped, for listing and detail views that
//! must not leak content.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecretViewError};

/// A fully hydrated secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Series id.
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// The payload as base64 text.
    pub content: String,

    pub checksum: String,

    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Expiry in epoch seconds, 0 when the secret never expires.
    #[serde(default)]
    pub expiry: i64,

    /// Content version id, if the series has a current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl Secret {
    /// Decode the base64 payload into UTF-8 text.
    pub fn decoded_content(&self) -> Result<String> {
        let bytes = BASE64.decode(self.content.trim()).map_err(|e| {
            SecretViewError::InvalidContent(format!("'{}' is not valid base64: {e}", self.name))
        })?;

        String::from_utf8(bytes).map_err(|_| {
            SecretViewError::InvalidContent(format!("'{}' does not decode to UTF-8", self.name))
        })
    }
}

/// A secret with its payload removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedSecret {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub checksum: String,

    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default)]
    pub expiry: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl SanitizedSecret {
    /// Copy every field of `secret` except its payload.
    pub fn from_secret(secret: &Secret) -> Self {
        Self {
            id: secret.id,
            name: secret.name.clone(),
            description: secret.description.clone(),
            checksum: secret.checksum.clone(),
            created_at: secret.created_at,
            created_by: secret.created_by.clone(),
            updated_at: secret.updated_at,
            updated_by: secret.updated_by.clone(),
            metadata: secret.metadata.clone(),
            content_type: secret.content_type.clone(),
            expiry: secret.expiry,
            version: secret.version,
        }
    }
}

impl From<&Secret> for SanitizedSecret {
    fn from(secret: &Secret) -> Self {
        Self::from_secret(secret)
    }
}
