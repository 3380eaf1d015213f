use cb_core::{Car, CarOwner, User};

use uuid::Uuid;

pub fn test_user(username: &str) -> User {
    User::new(
        username.to_string(),
        format!("{}-pass", username),
        format!("{} Fullname", username),
    )
}

pub fn test_car(vendor: &str, price: f64, owner_id: Uuid) -> Car {
    Car::new(
        vendor.to_string(),
        120.0,
        price,
        CarOwner {
            id: owner_id,
            fullname: "Test Owner".to_string(),
        },
    )
}
