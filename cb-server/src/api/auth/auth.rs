//! Auth REST API handlers
//!
//! Login and signup answer with the user and a `Set-Cookie` carrying the
//! signed login token; any failure on either route is a 401 so the client
//! cannot distinguish a bad password from a missing account.

use crate::api::cookies::{clear_cookie, login_cookie};
use crate::app_state::AppState;
use crate::{ApiError, ApiJson, ApiResult, LoginRequest, SignupRequest, UserDto};

use cb_auth::Claims;
use cb_core::User;
use cb_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/auth/:user_id
///
/// Public user profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let id = Uuid::parse_str(&user_id)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Cannot get user", e))?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    Ok(Json(user.into()))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_username(&req.username)
        .await
        .map_err(|e| {
            log::error!("Cannot login: {}", e);
            ApiError::unauthorized("Not you!")
        })?
        // Plaintext comparison is the documented legacy behavior.
        .filter(|user| user.password == req.password)
        .ok_or_else(|| ApiError::unauthorized("Not you!"))?;

    let token = state.tokens.issue(&Claims::for_user(&user))?;
    let cookie = login_cookie(&state.cookie_name, &token);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserDto::from(user)),
    ))
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.username.is_empty() || req.password.is_empty() || req.fullname.is_empty() {
        return Err(ApiError::unauthorized("Nope!"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let taken = repo.find_by_username(&req.username).await.map_err(|e| {
        log::error!("Cannot signup: {}", e);
        ApiError::unauthorized("Nope!")
    })?;
    if taken.is_some() {
        return Err(ApiError::unauthorized("Nope!"));
    }

    let user = User::new(req.username, req.password, req.fullname);
    repo.create(&user).await.map_err(|e| {
        log::error!("Cannot signup: {}", e);
        ApiError::unauthorized("Nope!")
    })?;

    let token = state.tokens.issue(&Claims::for_user(&user))?;
    let cookie = login_cookie(&state.cookie_name, &token);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserDto::from(user)),
    ))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_cookie(&state.cookie_name);

    (AppendHeaders([(SET_COOKIE, cookie)]), "logged-out!")
}
