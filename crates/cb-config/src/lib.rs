mod auth_config;
mod config;
mod cors_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3030;
const MIN_PORT: u16 = 1024;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_COOKIE_NAME: &str = "loginToken";
// Development fallback only; override via CB_AUTH_TOKEN_SECRET in any real
// deployment.
const DEFAULT_TOKEN_SECRET: &str = "carbay-dev-secret-change-me";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";

/// Origins the dev frontends are served from.
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://127.0.0.1:8080",
    "http://localhost:8080",
    "http://127.0.0.1:5173",
    "http://localhost:5173",
];

#[cfg(test)]
mod tests;
