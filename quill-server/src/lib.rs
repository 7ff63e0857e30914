//! Quill Server - backend for a blogging platform
//!
//! # Overview
//!
//! A schemaless REST backend over an embedded SurrealDB store:
//!
//! - **HTTP API** (`api`): blog, wishlist and comment routes
//! - **Authentication** (`auth`): JWT sessions carried in an httpOnly cookie
//! - **Database** (`db`): embedded SurrealDB storage and repositories
//!
//! # Module structure
//!
//! ```text
//! quill-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT sessions, cookie handling
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{AppState, Config, Server};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
