//! Authentication module
//!
//! Cookie-based JWT sessions:
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - current user context, extracted from the `token` cookie
//! - [`cookie`] - session cookie formatting and parsing

pub mod cookie;
pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
