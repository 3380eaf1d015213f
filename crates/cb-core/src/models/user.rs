//! User account entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credit score granted to every new account.
pub const SIGNUP_SCORE: i64 = 100;

/// A registered user. `score` is a non-negative credit balance; the
/// score-adjustment endpoint rejects any delta that would drive it below 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub fullname: String,
    pub score: i64,
    pub is_admin: bool,
}

impl User {
    /// Create a new account with the signup credit balance.
    pub fn new(username: String, password: String, fullname: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            fullname,
            score: SIGNUP_SCORE,
            is_admin: false,
        }
    }
}
