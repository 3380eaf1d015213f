pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::car_repository::{CarFilter, CarRepository};
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations, run at startup and by the test harness.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
