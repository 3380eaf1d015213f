use crate::{AuthError, Result as AuthErrorResult};

use cb_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login-token payload: the minimal identity a cookie carries.
///
/// Holding a validly signed copy of this IS being logged in — there is no
/// expiry and no revocation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub username: String,
    pub fullname: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

impl Claims {
    pub fn for_user(user: &User) -> Self {
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            fullname: user.fullname.clone(),
            is_admin: user.is_admin,
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub is not a valid UUID".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.username.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "username".to_string(),
                message: "username cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The subject as a typed id.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
