use cb_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. The stored password never leaves the
/// server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub fullname: String,
    pub score: i64,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            fullname: user.fullname,
            score: user.score,
            is_admin: user.is_admin,
        }
    }
}
