//! Blog Repository
//!
//! All reads project `<string>id AS id` so record ids reach the models as
//! plain "blog:key" strings. Feed limits (6 recent, 10 featured) are part
//! of the route contract and are baked into the queries.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::BlogPost;

#[derive(Clone)]
pub struct BlogRepository {
    base: BaseRepository,
}

impl BlogRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all blog posts
    pub async fn find_all(&self) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM blog")
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Find the six newest posts by creation timestamp
    pub async fn find_recent(&self) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM blog ORDER BY createdAt DESC LIMIT 6")
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Find a post by id, accepting both "blog:key" and bare key forms
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<BlogPost>> {
        let key = id.strip_prefix("blog:").unwrap_or(id);
        if key.is_empty() {
            return Ok(None);
        }

        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM blog WHERE id = type::thing('blog', $key)")
            .bind(("key", key.to_string()))
            .await?;
        let posts: Vec<BlogPost> = result.take(0)?;
        Ok(posts.into_iter().next())
    }

    /// Find posts owned by the given email
    pub async fn find_by_owner(&self, email: &str) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM blog WHERE userEmail = $email")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Find posts in the given category
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query("SELECT *, <string>id AS id FROM blog WHERE category = $category")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Distinct category values via server-side grouping
    pub async fn distinct_categories(&self) -> RepoResult<Vec<String>> {
        #[derive(Deserialize)]
        struct CategoryRow {
            category: String,
        }

        let rows: Vec<CategoryRow> = self
            .base
            .db()
            .query(
                "SELECT category FROM blog \
                 WHERE category != NONE AND category != NULL \
                 GROUP BY category",
            )
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| r.category).collect())
    }

    /// Case-insensitive substring search over title and body
    pub async fn search(&self, term: &str) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query(
                "SELECT *, <string>id AS id FROM blog \
                 WHERE string::lowercase(blogTitle ?? '') CONTAINS $term \
                    OR string::lowercase(longDes ?? '') CONTAINS $term",
            )
            .bind(("term", term.to_lowercase()))
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Top ten posts ranked by whitespace word count of the body
    ///
    /// A missing or empty body counts as zero. The computed wordCount is
    /// returned with each post.
    pub async fn find_featured(&self) -> RepoResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query(
                "SELECT *, <string>id AS id, \
                        array::len(string::words(longDes ?? '')) AS wordCount \
                 FROM blog ORDER BY wordCount DESC LIMIT 10",
            )
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// Insert a post, returning the assigned record id
    pub async fn create(&self, post: BlogPost) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("CREATE blog CONTENT $data RETURN VALUE <string>id")
            .bind(("data", post))
            .await?;
        let created: Option<String> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create blog post".to_string()))
    }
}
