use cb_auth::TokenSigner;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler. Built once at startup from the
/// immutable [`cb_config::Config`]; cloning is cheap (pool and signer are
/// reference-counted).
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenSigner>,
    /// Cookie the login token travels in.
    pub cookie_name: String,
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    /// Directory served for unmatched routes.
    pub public_dir: PathBuf,
}
