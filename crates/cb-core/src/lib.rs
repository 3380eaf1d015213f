pub mod models;

pub use models::car::{Car, CarOwner};
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
