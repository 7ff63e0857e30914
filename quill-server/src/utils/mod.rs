//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler result alias
//! - logging and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
