use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 5000 | HTTP API port |
/// | DATA_DIR | ./data | Directory holding the embedded datastore |
/// | JWT_SECRET | (generated in debug) | Token signing secret, 32+ chars |
/// | JWT_EXPIRATION_MINUTES | 60 | Session token lifetime |
/// | ALLOWED_ORIGINS | http://localhost:5173 | Comma-separated CORS origins |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/srv/quill HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Directory for the embedded datastore
    pub data_dir: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Origins allowed to make credentialed requests
    pub allowed_origins: Vec<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            jwt: JwtConfig::default(),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
