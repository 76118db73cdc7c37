//! Secret series: the named identity of a secret, independent of any
//! particular stored version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named secret's identity and lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretSeries {
    pub id: i64,

    /// Unique secret name (e.g. "database.password").
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,

    /// Content type hint such as "text/plain"; unset for most secrets.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Id of the content row currently served for this name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<i64>,
}
