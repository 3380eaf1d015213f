use crate::app_state::AppState;
use crate::{
    create_car, delete_car, get_car, get_user, health, list_cars, login, logout, signup,
    update_car, update_score,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentialed CORS: the cookie only flows for explicitly listed
    // origins, so no wildcard is possible here.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let static_files = ServeDir::new(&state.public_dir)
        .fallback(ServeFile::new(state.public_dir.join("index.html")));

    Router::new()
        // Cars API
        .route("/api/car", get(list_cars).post(create_car).put(update_car))
        .route("/api/car/{car_id}", get(get_car).delete(delete_car))
        // Auth API
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/{user_id}", get(get_user))
        // User API
        .route("/api/user", put(update_score))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Static frontend for everything else
        .fallback_service(static_files)
        // Add shared state
        .with_state(state)
        .layer(cors)
}
