use crate::ApiError;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

/// `axum::Json` with the rejection mapped into [`ApiError`], so malformed
/// or incomplete bodies answer 400 like every other validation failure
/// instead of axum's default 422.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
