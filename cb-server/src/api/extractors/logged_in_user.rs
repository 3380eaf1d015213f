//! Axum extractors for cookie-token authentication

use crate::ApiError;
use crate::app_state::AppState;

use cb_auth::Claims;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

/// Extracts the logged-in user's claims from the login-token cookie.
///
/// Rejects with 401 when the cookie is missing or its token does not
/// verify; handlers never see a half-authenticated request.
pub struct LoggedInUser(pub Claims);

impl FromRequestParts<AppState> for LoggedInUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let claims = parts
                .headers
                .get(header::COOKIE)
                .and_then(|value| value.to_str().ok())
                .and_then(|raw| cookie_value(raw, &state.cookie_name))
                .and_then(|token| state.tokens.verify(token));

            match claims {
                Some(claims) => Ok(LoggedInUser(claims)),
                None => Err(ApiError::unauthorized("No logged in user")),
            }
        }
    }
}

/// Find a cookie's value in a `Cookie` header.
fn cookie_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::cookie_value;

    #[test]
    fn given_multiple_cookies_when_searched_then_finds_named_value() {
        let raw = "theme=dark; loginToken=abc.def.ghi; other=1";

        assert_eq!(cookie_value(raw, "loginToken"), Some("abc.def.ghi"));
        assert_eq!(cookie_value(raw, "theme"), Some("dark"));
        assert_eq!(cookie_value(raw, "missing"), None);
    }

    #[test]
    fn given_name_prefix_collision_when_searched_then_does_not_match() {
        let raw = "loginTokenX=nope";

        assert_eq!(cookie_value(raw, "loginToken"), None);
    }
}
