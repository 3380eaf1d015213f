use crate::{ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_TOKEN_SECRET};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for login tokens. Never logged.
    pub token_secret: String,
    /// Cookie the login token travels in.
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::from(DEFAULT_TOKEN_SECRET),
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_secret.is_empty() {
            return Err(ConfigError::auth("auth.token_secret cannot be empty"));
        }

        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c.is_whitespace() || c == ';' || c == '=')
        {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name must be a valid cookie name, got {:?}",
                self.cookie_name
            )));
        }

        Ok(())
    }
}
