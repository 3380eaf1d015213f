pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{get_user, login, logout, signup},
        login_request::LoginRequest,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    cars::{
        car_dto::{CarDto, CarOwnerDto},
        cars::{create_car, delete_car, get_car, list_cars, update_car},
        create_car_request::CreateCarRequest,
        delete_car_response::DeleteCarResponse,
        list_cars_query::ListCarsQuery,
        update_car_request::UpdateCarRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    extractors::logged_in_user::LoggedInUser,
    users::{update_score_request::UpdateScoreRequest, users::update_score},
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
