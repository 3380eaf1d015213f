use crate::api::coerce;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCarRequest {
    pub vendor: String,

    /// Accepted as a number or a numeric string.
    #[serde(deserialize_with = "coerce::flexible_f64")]
    pub speed: f64,

    #[serde(deserialize_with = "coerce::flexible_f64")]
    pub price: f64,
}
