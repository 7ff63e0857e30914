//! Comment Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Comment;

#[derive(Clone)]
pub struct CommentRepository {
    base: BaseRepository,
}

impl CommentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find comments on a blog post, newest first
    pub async fn find_by_blog(&self, blog_id: &str) -> RepoResult<Vec<Comment>> {
        let comments: Vec<Comment> = self
            .base
            .db()
            .query(
                "SELECT *, <string>id AS id FROM comment WHERE blogId = $blog_id \
                 ORDER BY createdAt DESC",
            )
            .bind(("blog_id", blog_id.to_string()))
            .await?
            .take(0)?;
        Ok(comments)
    }

    /// Insert a comment, returning the assigned record id
    pub async fn create(&self, comment: Comment) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("CREATE comment CONTENT $data RETURN VALUE <string>id")
            .bind(("data", comment))
            .await?;
        let created: Option<String> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create comment".to_string()))
    }
}
