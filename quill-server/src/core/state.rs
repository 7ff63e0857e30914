use std::path::Path;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state
///
/// Handlers receive this through axum's `State` extractor. Cloning is
/// cheap: the database handle and JWT service are shared references.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | Session token service |
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT session service (shared)
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Initialize application state
    ///
    /// Creates the data directory if needed, opens the datastore at
    /// `data_dir/quill.db` and builds the JWT service from the config.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {}", e)))?;

        let db_path = Path::new(&config.data_dir).join("quill.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
        })
    }

    /// Build state around an already-open database
    ///
    /// Used by tests that run against a throwaway datastore.
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }
}
