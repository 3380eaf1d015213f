pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{get_user, login, logout, signup},
        login_request::LoginRequest,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    cars::{
        car_dto::{CarDto, CarOwnerDto},
        cars::{create_car, delete_car, get_car, list_cars, update_car},
        create_car_request::CreateCarRequest,
        delete_car_response::DeleteCarResponse,
        list_cars_query::ListCarsQuery,
        update_car_request::UpdateCarRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    extractors::logged_in_user::LoggedInUser,
    users::{update_score_request::UpdateScoreRequest, users::update_score},
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use cb_auth::TokenSigner;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = cb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let config_dir = cb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    cb_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Build application state
    let app_state = AppState {
        pool,
        tokens: Arc::new(TokenSigner::with_hs256(config.auth.token_secret.as_bytes())),
        cookie_name: config.auth.cookie_name.clone(),
        allowed_origins: config.cors.allowed_origins.clone(),
        public_dir: PathBuf::from(&config.server.public_dir),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}/", actual_addr);

    // Start server with graceful shutdown on ctrl-c
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    Ok(())
}
