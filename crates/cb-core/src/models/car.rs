//! Car listing entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Back-reference to the user who created a listing.
/// Carries the display name so listings render without a user lookup;
/// it is not an ownership relation that cascades deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarOwner {
    pub id: Uuid,
    pub fullname: String,
}

/// A car listing. Identity is `id`, assigned when the record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub vendor: String,
    pub speed: f64,
    pub price: f64,
    pub owner: CarOwner,
    /// Free-form notes attached to the listing, in insertion order.
    pub msgs: Option<Vec<String>>,
}

impl Car {
    /// Create a new listing owned by the given user identity.
    pub fn new(vendor: String, speed: f64, price: f64, owner: CarOwner) -> Self {
        Self {
            id: Uuid::new_v4(),
            vendor,
            speed,
            price,
            owner,
            msgs: None,
        }
    }
}
