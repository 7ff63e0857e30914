//! Comment Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Comment document, listed per post newest-first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Record id as "comment:key", store-assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Referenced blog post id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<String>,
    /// Client-supplied creation timestamp (unix millis), sort key for reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Any additional client-supplied fields (comment text, author, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
