//! Repository Module
//!
//! Query access to the three document collections. Each repository wraps
//! the shared [`BaseRepository`] and speaks raw SurrealQL against its own
//! table; route-level decisions (404 on absence, empty-list handling)
//! stay in the handlers.

pub mod blog;
pub mod comment;
pub mod wishlist;

pub use blog::BlogRepository;
pub use comment::CommentRepository;
pub use wishlist::WishlistRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error type
///
/// The store is the only failure source at this seam; lookups that find
/// nothing return `Option`/empty collections instead of erroring.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
