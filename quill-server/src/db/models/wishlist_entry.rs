//! Wishlist Entry Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wishlist entry document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Record id as "wishlist:key", store-assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Referenced blog post id (not enforced as a foreign key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<String>,
    /// Any additional client-supplied fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Composite key identifying entries for deletion
///
/// Both fields must match; there is no partial-key deletion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistKey {
    pub user_email: String,
    pub blog_id: String,
}
