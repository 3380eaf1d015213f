//! User REST API handlers

use crate::api::cookies::login_cookie;
use crate::app_state::AppState;
use crate::{ApiError, ApiJson, ApiResult, LoggedInUser, UpdateScoreRequest, UserDto};

use cb_auth::Claims;
use cb_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};

/// PUT /api/user
///
/// Adjust the caller's credit score by a signed delta. The balance may
/// reach 0 but never go below it; the check runs against the freshly
/// loaded record, not the token.
pub async fn update_score(
    State(state): State<AppState>,
    LoggedInUser(claims): LoggedInUser,
    ApiJson(req): ApiJson<UpdateScoreRequest>,
) -> ApiResult<impl IntoResponse> {
    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(claims.user_id()?)
        .await
        .map_err(|e| ApiError::internal("Cannot update score", e))?
        .ok_or_else(|| ApiError::unauthorized("No logged in user"))?;

    if user.score + req.diff < 0 {
        return Err(ApiError::insufficient_credit("No credit"));
    }

    user.score += req.diff;
    repo.update(&user)
        .await
        .map_err(|e| ApiError::internal("Cannot update score", e))?;

    // The token mirrors the user's identity; refresh it alongside the score.
    let token = state.tokens.issue(&Claims::for_user(&user))?;
    let cookie = login_cookie(&state.cookie_name, &token);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(UserDto::from(user)),
    ))
}
