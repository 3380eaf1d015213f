use serde::Deserialize;

/// Missing fields fall back to empty strings; the handler rejects empty
/// credentials with the signup 401.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub fullname: String,
}
