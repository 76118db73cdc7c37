//! Parsing of CLI input documents: source records for `detail`/`show`
//! and lookup outcomes for `batch`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::{Result, SecretViewError};
use crate::model::{SanitizedSecret, Secret, SecretSeries, SecretSeriesAndContent};
use crate::response::{BatchSecretContents, SecretDetailBuilder};

/// Which internal shape a source document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    Series,
    SeriesAndContent,
    Secret,
    Sanitized,
}

impl SourceShape {
    /// Parse a `--from` value.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "series" => Ok(Self::Series),
            "series-and-content" | "pair" => Ok(Self::SeriesAndContent),
            "secret" => Ok(Self::Secret),
            "sanitized" => Ok(Self::Sanitized),
            other => Err(SecretViewError::CommandFailed(format!(
                "unknown source shape '{other}' (supported: series, series-and-content, secret, sanitized)"
            ))),
        }
    }
}

/// A source document mapped onto a fresh builder.
pub struct Projection {
    pub builder: SecretDetailBuilder,
    /// Payload carried by the source, only ever set for full secrets.
    pub payload: Option<String>,
}

/// Parse `json` as the given shape and stage it on a new builder.
pub fn project(shape: SourceShape, json: &str) -> Result<Projection> {
    let builder = crate::response::SecretDetail::builder();

    let projection = match shape {
        SourceShape::Series => Projection {
            builder: builder.series(&parse::<SecretSeries>(json, "series")?),
            payload: None,
        },
        SourceShape::SeriesAndContent => Projection {
            builder: builder.series_and_content(&parse::<SecretSeriesAndContent>(
                json,
                "series-and-content",
            )?),
            payload: None,
        },
        SourceShape::Secret => {
            let secret = parse::<Secret>(json, "secret")?;
            Projection {
                builder: builder.secret(&secret),
                payload: Some(secret.content),
            }
        }
        SourceShape::Sanitized => Projection {
            builder: builder.sanitized_secret(&parse::<SanitizedSecret>(json, "sanitized")?),
            payload: None,
        },
    };

    Ok(projection)
}

fn parse<T: DeserializeOwned>(json: &str, shape: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| SecretViewError::Schema(format!("not a valid {shape} record: {e}")))
}

// ---------------------------------------------------------------------------
// Batch input
// ---------------------------------------------------------------------------

/// One lookup outcome in a `batch` input document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LookupEntry {
    /// A full secret whose payload is decoded into the success map.
    Resolved { secret: Secret },
    Failed { name: String, error: String },
    Found { name: String, content: String },
}

/// Fold lookup outcomes, in order, into a batch response.
///
/// A full secret whose payload cannot be decoded is recorded as an error
/// for its name; it does not abort the batch.
pub fn fold_batch(entries: Vec<LookupEntry>) -> BatchSecretContents {
    entries
        .into_iter()
        .fold(BatchSecretContents::builder(), |batch, entry| match entry {
            LookupEntry::Resolved { secret } => {
                let outcome = secret.decoded_content().map_err(|e| e.to_string());
                batch.record(secret.name, outcome)
            }
            LookupEntry::Failed { name, error } => batch.add_error(name, error),
            LookupEntry::Found { name, content } => batch.add_success(name, content),
        })
        .build()
}

/// Parse a JSON array of lookup outcomes.
pub fn parse_batch(json: &str) -> Result<Vec<LookupEntry>> {
    serde_json::from_str(json)
        .map_err(|e| SecretViewError::Schema(format!("not a list of lookup outcomes: {e}")))
}
