use cb_core::{Car, CarOwner};

use serde::{Deserialize, Serialize};

/// Owner reference as it appears on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct CarOwnerDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: String,
}

impl From<CarOwner> for CarOwnerDto {
    fn from(owner: CarOwner) -> Self {
        Self {
            id: owner.id.to_string(),
            fullname: owner.fullname,
        }
    }
}

/// Car DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CarDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub vendor: String,
    pub speed: f64,
    pub price: f64,
    pub owner: CarOwnerDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msgs: Option<Vec<String>>,
}

impl From<Car> for CarDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.to_string(),
            vendor: car.vendor,
            speed: car.speed,
            price: car.price,
            owner: car.owner.into(),
            msgs: car.msgs,
        }
    }
}
