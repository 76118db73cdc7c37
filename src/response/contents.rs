//! `BatchSecretContents`: the result of looking up several secrets at once.
//!
//! Names that resolved land in `successSecrets` (name -> decoded content),
//! names that failed land in `errorSecrets` (name -> reason).  A name is in
//! at most one of the two maps, and it is in the one matching the most
//! recent outcome recorded for it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecretViewError};

/// Immutable batch lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BatchParts")]
pub struct BatchSecretContents {
    success_secrets: BTreeMap<String, String>,
    error_secrets: BTreeMap<String, String>,
}

impl BatchSecretContents {
    /// Start a new builder with both maps empty.
    pub fn builder() -> BatchSecretContentsBuilder {
        BatchSecretContentsBuilder::default()
    }

    /// Parse the wire representation. Either map may be omitted.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SecretViewError::Schema(e.to_string()))
    }

    pub fn success_secrets(&self) -> &BTreeMap<String, String> {
        &self.success_secrets
    }

    pub fn error_secrets(&self) -> &BTreeMap<String, String> {
        &self.error_secrets
    }

    /// True when no lookup failed.
    pub fn is_complete(&self) -> bool {
        self.error_secrets.is_empty()
    }

    /// Total number of names across both maps.
    pub fn len(&self) -> usize {
        self.success_secrets.len() + self.error_secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates lookup outcomes one name at a time.
///
/// Not synchronized: callers resolving names in parallel must funnel the
/// outcomes through a single owner of the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSecretContentsBuilder {
    success_secrets: BTreeMap<String, String>,
    error_secrets: BTreeMap<String, String>,
}

impl BatchSecretContentsBuilder {
    /// Record `name` as resolved, replacing any earlier outcome for it.
    pub fn add_success(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        if self.error_secrets.remove(&name).is_some() {
            tracing::debug!(name = %name, "success supersedes earlier error");
        }
        self.success_secrets.insert(name, content.into());
        self
    }

    /// Record `name` as failed, replacing any earlier outcome for it.
    pub fn add_error(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        if self.success_secrets.remove(&name).is_some() {
            tracing::debug!(name = %name, "error supersedes earlier success");
        }
        self.error_secrets.insert(name, reason.into());
        self
    }

    /// Record one lookup result: `Ok(content)` or `Err(reason)`.
    pub fn record<C, R>(self, name: impl Into<String>, outcome: std::result::Result<C, R>) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        match outcome {
            Ok(content) => self.add_success(name, content),
            Err(reason) => self.add_error(name, reason),
        }
    }

    /// Apply every entry of `secrets` as a success, in map order.
    pub fn success_secrets<K, V>(self, secrets: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        secrets
            .into_iter()
            .fold(self, |builder, (name, content)| builder.add_success(name, content))
    }

    /// Apply every entry of `secrets` as an error, in map order.
    pub fn error_secrets<K, V>(self, secrets: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        secrets
            .into_iter()
            .fold(self, |builder, (name, reason)| builder.add_error(name, reason))
    }

    /// Finalize. Never fails.
    pub fn build(self) -> BatchSecretContents {
        tracing::debug!(
            succeeded = self.success_secrets.len(),
            failed = self.error_secrets.len(),
            "built batch secret contents"
        );
        BatchSecretContents {
            success_secrets: self.success_secrets,
            error_secrets: self.error_secrets,
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchParts {
    #[serde(default)]
    success_secrets: Option<BTreeMap<String, String>>,
    #[serde(default)]
    error_secrets: Option<BTreeMap<String, String>>,
}

impl TryFrom<BatchParts> for BatchSecretContents {
    type Error = String;

    fn try_from(parts: BatchParts) -> std::result::Result<Self, String> {
        let success = parts.success_secrets.unwrap_or_default();
        let errors = parts.error_secrets.unwrap_or_default();

        if let Some(name) = success.keys().find(|name| errors.contains_key(*name)) {
            return Err(format!(
                "'{name}' appears in both successSecrets and errorSecrets"
            ));
        }

        Ok(BatchSecretContents::builder()
            .success_secrets(success)
            .error_secrets(errors)
            .build())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_empty_maps() {
        let batch = BatchSecretContents::builder().build();
        assert!(batch.success_secrets().is_empty());
        assert!(batch.error_secrets().is_empty());
        assert!(batch.is_empty());
        assert!(batch.is_complete());
    }

    #[test]
    fn error_after_success_moves_name() {
        let batch = BatchSecretContents::builder()
            .add_success("a", "x")
            .add_error("a", "denied")
            .build();

        assert!(batch.success_secrets().is_empty());
        assert_eq!(batch.error_secrets().get("a").map(String::as_str), Some("denied"));
    }

    #[test]
    fn success_after_error_moves_name() {
        let batch = BatchSecretContents::builder()
            .add_error("a", "not found")
            .add_success("a", "x")
            .build();

        assert!(batch.error_secrets().is_empty());
        assert_eq!(batch.success_secrets().get("a").map(String::as_str), Some("x"));
    }

    #[test]
    fn repeated_success_overwrites_content() {
        let batch = BatchSecretContents::builder()
            .add_success("a", "old")
            .add_success("a", "new")
            .build();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.success_secrets()["a"], "new");
    }

    #[test]
    fn record_dispatches_on_outcome() {
        let batch = BatchSecretContents::builder()
            .record("ok", Ok::<_, String>("value"))
            .record("bad", Err::<String, _>("decryption failed"))
            .build();

        assert_eq!(batch.success_secrets()["ok"], "value");
        assert_eq!(batch.error_secrets()["bad"], "decryption failed");
        assert!(!batch.is_complete());
    }

    #[test]
    fn deserialize_rejects_overlapping_names() {
        let err = BatchSecretContents::from_json(
            r#"{"successSecrets":{"a":"x"},"errorSecrets":{"a":"denied"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SecretViewError::Schema(_)));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn deserialize_defaults_missing_maps() {
        let batch = BatchSecretContents::from_json("{}").unwrap();
        assert!(batch.is_empty());

        let batch = BatchSecretContents::from_json(r#"{"errorSecrets":{"b":"gone"}}"#).unwrap();
        assert!(batch.success_secrets().is_empty());
        assert_eq!(batch.error_secrets()["b"], "gone");
    }
}
