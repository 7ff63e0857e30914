//! Wishlist Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::WishlistEntry;

#[derive(Clone)]
pub struct WishlistRepository {
    base: BaseRepository,
}

impl WishlistRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find entries belonging to the given email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Vec<WishlistEntry>> {
        let entries: Vec<WishlistEntry> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM wishlist WHERE userEmail = $email")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(entries)
    }

    /// Insert an entry, returning the assigned record id
    pub async fn create(&self, entry: WishlistEntry) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("CREATE wishlist CONTENT $data RETURN VALUE <string>id")
            .bind(("data", entry))
            .await?;
        let created: Option<String> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create wishlist entry".to_string()))
    }

    /// Delete every entry matching both userEmail and blogId
    ///
    /// Returns how many entries were removed. Entries matching only one
    /// of the two fields are left untouched.
    pub async fn delete_by_key(&self, email: &str, blog_id: &str) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query(
                "DELETE wishlist WHERE userEmail = $email AND blogId = $blog_id \
                 RETURN BEFORE",
            )
            .bind(("email", email.to_string()))
            .bind(("blog_id", blog_id.to_string()))
            .await?;
        let deleted: Vec<serde_json::Value> = result.take(0)?;
        Ok(deleted.len() as u64)
    }
}
