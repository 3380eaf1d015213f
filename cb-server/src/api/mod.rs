pub mod auth;
pub mod cars;
pub mod coerce;
pub mod cookies;
pub mod error;
pub mod extractors;
pub mod users;
