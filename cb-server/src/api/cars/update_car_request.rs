use crate::api::coerce;

use serde::Deserialize;

/// Body of PUT /api/car. The `owner` the client echoes back is ignored:
/// ownership comes from the stored record and the login token.
#[derive(Debug, Deserialize)]
pub struct UpdateCarRequest {
    #[serde(rename = "_id")]
    pub id: String,

    pub vendor: String,

    #[serde(deserialize_with = "coerce::flexible_f64")]
    pub speed: f64,

    #[serde(deserialize_with = "coerce::flexible_f64")]
    pub price: f64,
}
