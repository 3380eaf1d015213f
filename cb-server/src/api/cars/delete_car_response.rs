use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteCarResponse {
    pub msg: String,
    #[serde(rename = "carId")]
    pub car_id: String,
}
