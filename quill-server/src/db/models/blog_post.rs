//! Blog Post Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Blog post document
///
/// The named fields are the ones queries and handlers rely on; anything
/// else a client posts travels through `extra` untouched. All named fields
/// are optional because inserts accept the document as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Record id as "blog:key", store-assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_title: Option<String>,
    /// Long-form body text, ranked by word count on the feature feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_des: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Owner email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Client-supplied creation timestamp (unix millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Any additional client-supplied fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
