//! `SecretDetail`: the canonical external view of one secret.
//!
//! Every internal shape (series, series + content, flat secret, sanitized
//! secret) funnels through `SecretDetailBuilder`, so all of them share one
//! set of defaults and one wire format:
//!
//! ```text
//! { "name", "version"?, "description", "content"?, "checksum",
//!   "createdAtSeconds", "createdBy", "updatedAtSeconds", "updatedBy",
//!   "type"?, "metadata", "expiry" }
//! ```
//!
//! Fields marked `?` are omitted when absent; they are never written as
//! JSON `null`.  `metadata` is always present, `{}` when empty.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecretViewError};
use crate::model::{SanitizedSecret, Secret, SecretSeries, SecretSeriesAndContent};

const RECORD: &str = "SecretDetail";

// ---------------------------------------------------------------------------
// SecretDetail
// ---------------------------------------------------------------------------

/// Immutable detail record for a single secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SecretDetailParts")]
pub struct SecretDetail {
    name: String,

    /// Content version id; absent means "no specific version".
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,

    description: String,

    /// Payload as base64 text. Only present when the caller set it.
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    checksum: String,
    created_at_seconds: i64,
    created_by: String,
    updated_at_seconds: i64,
    updated_by: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,

    metadata: BTreeMap<String, String>,
    expiry: i64,
}

impl SecretDetail {
    /// Start a new builder with every defaultable field at its default.
    pub fn builder() -> SecretDetailBuilder {
        SecretDetailBuilder::default()
    }

    /// Parse the wire representation.
    ///
    /// Missing `metadata` becomes `{}` and missing `description` becomes
    /// `""`; any other missing or mistyped field is a schema error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SecretViewError::Schema(e.to_string()))
    }

    /// Same as [`SecretDetail::from_json`] for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| SecretViewError::Schema(e.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn created_at_seconds(&self) -> i64 {
        self.created_at_seconds
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn updated_at_seconds(&self) -> i64 {
        self.updated_at_seconds
    }

    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Expiry in epoch seconds, 0 when the secret never expires.
    pub fn expiry(&self) -> i64 {
        self.expiry
    }
}

/// One-line summary that skips absent optionals and never shows the payload.
impl fmt::Display for SecretDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretDetail{{name={}", self.name)?;
        if let Some(version) = self.version {
            write!(f, ", version={version}")?;
        }
        write!(
            f,
            ", description={}, checksum={}, createdAtSeconds={}, createdBy={}, \
             updatedAtSeconds={}, updatedBy={}",
            self.description,
            self.checksum,
            self.created_at_seconds,
            self.created_by,
            self.updated_at_seconds,
            self.updated_by
        )?;
        if let Some(content_type) = &self.content_type {
            write!(f, ", type={content_type}")?;
        }
        write!(f, ", metadata={:?}, expiry={}}}", self.metadata, self.expiry)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Mutable accumulator for a [`SecretDetail`].
///
/// Setters and source mappings may be called in any order; a later call
/// overwrites whatever an earlier one staged for the same field.  Required
/// fields are only checked in [`SecretDetailBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDetailBuilder {
    name: Option<String>,
    version: Option<i64>,
    description: String,
    content: Option<String>,
    checksum: String,
    created_at_seconds: Option<i64>,
    created_by: Option<String>,
    updated_at_seconds: Option<i64>,
    updated_by: Option<String>,
    content_type: Option<String>,
    metadata: BTreeMap<String, String>,
    expiry: i64,
}

impl Default for SecretDetailBuilder {
    fn default() -> Self {
        Self {
            name: None,
            version: None,
            description: String::new(),
            content: None,
            checksum: String::new(),
            created_at_seconds: None,
            created_by: None,
            updated_at_seconds: None,
            updated_by: None,
            content_type: None,
            metadata: BTreeMap::new(),
            expiry: 0,
        }
    }
}

impl SecretDetailBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `None` clears a previously staged version.
    pub fn version(mut self, version: Option<i64>) -> Self {
        self.version = version;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Stage the payload (base64 text). No source mapping sets this.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Drop a previously staged payload.
    pub fn clear_content(mut self) -> Self {
        self.content = None;
        self
    }

    pub fn checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = checksum.into();
        self
    }

    pub fn created_at_seconds(mut self, created_at: i64) -> Self {
        self.created_at_seconds = Some(created_at);
        self
    }

    pub fn created_by(mut self, person: impl Into<String>) -> Self {
        self.created_by = Some(person.into());
        self
    }

    pub fn updated_at_seconds(mut self, updated_at: i64) -> Self {
        self.updated_at_seconds = Some(updated_at);
        self
    }

    pub fn updated_by(mut self, person: impl Into<String>) -> Self {
        self.updated_by = Some(person.into());
        self
    }

    pub fn content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    /// Replace the whole metadata mapping.
    pub fn metadata<K, V>(mut self, metadata: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = metadata
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn expiry(mut self, expiry: i64) -> Self {
        self.expiry = expiry;
        self
    }

    // --- Source mappings ---

    /// Stage the series-level fields. Checksum, metadata, expiry and
    /// content are left untouched.
    pub fn series(self, series: &SecretSeries) -> Self {
        self.name(series.name.as_str())
            .version(series.current_version)
            .description(series.description.as_str())
            .created_at_seconds(series.created_at.timestamp())
            .created_by(series.created_by.as_str())
            .updated_at_seconds(series.updated_at.timestamp())
            .updated_by(series.updated_by.as_str())
            .content_type(series.content_type.clone())
    }

    /// Stage the series fields plus the content version's checksum,
    /// metadata and expiry.
    pub fn series_and_content(self, pair: &SecretSeriesAndContent) -> Self {
        self.series(&pair.series)
            .checksum(pair.content.hmac.as_str())
            .metadata(pair.content.metadata.clone())
            .expiry(pair.content.expiry)
    }

    /// Stage every metadata field of a fully hydrated secret. The payload
    /// is not copied; call [`SecretDetailBuilder::content`] for that.
    pub fn secret(self, secret: &Secret) -> Self {
        self.name(secret.name.as_str())
            .version(secret.version)
            .description(secret.description.as_str())
            .checksum(secret.checksum.as_str())
            .created_at_seconds(secret.created_at.timestamp())
            .created_by(secret.created_by.as_str())
            .updated_at_seconds(secret.updated_at.timestamp())
            .updated_by(secret.updated_by.as_str())
            .content_type(secret.content_type.clone())
            .metadata(secret.metadata.clone())
            .expiry(secret.expiry)
    }

    pub fn sanitized_secret(self, sanitized: &SanitizedSecret) -> Self {
        self.name(sanitized.name.as_str())
            .version(sanitized.version)
            .description(sanitized.description.as_str())
            .checksum(sanitized.checksum.as_str())
            .created_at_seconds(sanitized.created_at.timestamp())
            .created_by(sanitized.created_by.as_str())
            .updated_at_seconds(sanitized.updated_at.timestamp())
            .updated_by(sanitized.updated_by.as_str())
            .content_type(sanitized.content_type.clone())
            .metadata(sanitized.metadata.clone())
            .expiry(sanitized.expiry)
    }

    /// Finalize into an immutable [`SecretDetail`].
    ///
    /// Fails if name, createdAtSeconds, createdBy, updatedAtSeconds or
    /// updatedBy was never staged.
    pub fn build(self) -> Result<SecretDetail> {
        let detail = SecretDetail {
            name: required(self.name, "name")?,
            version: self.version,
            description: self.description,
            content: self.content,
            checksum: self.checksum,
            created_at_seconds: required(self.created_at_seconds, "createdAtSeconds")?,
            created_by: required(self.created_by, "createdBy")?,
            updated_at_seconds: required(self.updated_at_seconds, "updatedAtSeconds")?,
            updated_by: required(self.updated_by, "updatedBy")?,
            content_type: self.content_type,
            metadata: self.metadata,
            expiry: self.expiry,
        };

        tracing::debug!(name = %detail.name, version = ?detail.version, "built secret detail");
        Ok(detail)
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(SecretViewError::MissingField {
        record: RECORD,
        field,
    })
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Wire shape accepted by `Deserialize`, replayed through the builder.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretDetailParts {
    name: String,
    #[serde(default)]
    version: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    checksum: String,
    created_at_seconds: i64,
    created_by: String,
    updated_at_seconds: i64,
    updated_by: String,
    #[serde(rename = "type", default)]
    content_type: Option<String>,
    #[serde(default)]
    metadata: Option<BTreeMap<String, String>>,
    expiry: i64,
}

impl TryFrom<SecretDetailParts> for SecretDetail {
    type Error = SecretViewError;

    fn try_from(parts: SecretDetailParts) -> Result<Self> {
        let mut builder = SecretDetail::builder()
            .name(parts.name)
            .version(parts.version)
            .description(parts.description.unwrap_or_default())
            .checksum(parts.checksum)
            .created_at_seconds(parts.created_at_seconds)
            .created_by(parts.created_by)
            .updated_at_seconds(parts.updated_at_seconds)
            .updated_by(parts.updated_by)
            .content_type(parts.content_type)
            .metadata(parts.metadata.unwrap_or_default())
            .expiry(parts.expiry);

        if let Some(content) = parts.content {
            builder = builder.content(content);
        }

        builder.build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
