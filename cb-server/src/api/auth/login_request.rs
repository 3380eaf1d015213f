use serde::Deserialize;

/// Missing fields fall back to empty strings so a short body lands in the
/// credential check (and its 401) rather than a body-shape error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
