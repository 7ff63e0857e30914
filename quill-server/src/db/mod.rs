//! Database layer
//!
//! Embedded SurrealDB (RocksDB backend). [`DbService`] opens the datastore
//! and selects the namespace and database; repositories in
//! [`repository`] run the actual queries against the shared handle.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "quill";
const DATABASE: &str = "blog";

/// Owns the embedded database connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the datastore at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        tracing::info!("Database connection established (SurrealDB RocksDB at {})", db_path);

        Ok(Self { db })
    }
}
