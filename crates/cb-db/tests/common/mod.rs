#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{test_car, test_user};
pub use test_db::create_test_pool;
