use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

/// Browser origins allowed to call the API with credentials. Cookies only
/// flow cross-origin when the origin is listed explicitly, so there is no
/// wildcard mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| String::from(*s))
                .collect(),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors("cors.allowed_origins cannot be empty"));
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must be http(s) origins, got {:?}",
                    origin
                )));
            }
        }

        Ok(())
    }
}
