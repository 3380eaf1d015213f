use serde::Deserialize;

/// Query string of GET /api/car. Both filters optional; a `maxPrice` that
/// does not parse as a finite number simply disables the price filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListCarsQuery {
    #[serde(default)]
    pub txt: Option<String>,

    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<String>,
}
