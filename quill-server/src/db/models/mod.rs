//! Database Models
//!
//! Typed views over the schemaless collections. Field names serialize in
//! their wire (camelCase) form and are stored that way, so raw queries read
//! the same names the HTTP contract uses. Every document model keeps
//! unknown fields in a flattened map so posted documents round-trip
//! exactly as received.
//!
//! Record ids cross this boundary as plain "table:key" strings: read
//! queries project `<string>id AS id` and inserts return the cast id, so
//! no record-id type ever reaches serde.

pub mod blog_post;
pub mod comment;
pub mod wishlist_entry;

pub use blog_post::BlogPost;
pub use comment::Comment;
pub use wishlist_entry::{WishlistEntry, WishlistKey};
