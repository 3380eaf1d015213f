//! Car REST API handlers
//!
//! Listing and lookup are public; every mutation requires a login token
//! and only the listing's owner may update or delete it.

use crate::{
    ApiError, ApiJson, ApiResult, CarDto, CreateCarRequest, DeleteCarResponse, ListCarsQuery,
    LoggedInUser, UpdateCarRequest,
};
use crate::app_state::AppState;

use cb_core::{Car, CarOwner};
use cb_db::{CarFilter, CarRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/car
///
/// List cars, optionally filtered by vendor substring and price ceiling
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<ListCarsQuery>,
) -> ApiResult<Json<Vec<CarDto>>> {
    let filter = CarFilter {
        txt: query.txt.filter(|t| !t.is_empty()),
        // Mirrors the client contract: only a finite number activates the
        // price filter.
        max_price: query
            .max_price
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|price| price.is_finite()),
    };

    let repo = CarRepository::new(state.pool.clone());
    let cars = repo
        .find_filtered(&filter)
        .await
        .map_err(|e| ApiError::internal("Cannot load cars", e))?;

    Ok(Json(cars.into_iter().map(CarDto::from).collect()))
}

/// GET /api/car/:car_id
///
/// Get a single car by ID
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> ApiResult<Json<CarDto>> {
    let id = Uuid::parse_str(&car_id)?;

    let repo = CarRepository::new(state.pool.clone());
    let car = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Cannot get car", e))?
        .ok_or_else(|| ApiError::not_found(format!("Car {} not found", car_id)))?;

    Ok(Json(car.into()))
}

/// POST /api/car
///
/// Create a new listing owned by the caller
pub async fn create_car(
    State(state): State<AppState>,
    LoggedInUser(claims): LoggedInUser,
    ApiJson(req): ApiJson<CreateCarRequest>,
) -> ApiResult<Json<CarDto>> {
    let owner = CarOwner {
        id: claims.user_id()?,
        fullname: claims.fullname,
    };
    let car = Car::new(req.vendor, req.speed, req.price, owner);

    let repo = CarRepository::new(state.pool.clone());
    repo.create(&car)
        .await
        .map_err(|e| ApiError::internal("Cannot add car", e))?;

    Ok(Json(car.into()))
}

/// PUT /api/car
///
/// Replace a listing. Only the owner may update it.
pub async fn update_car(
    State(state): State<AppState>,
    LoggedInUser(claims): LoggedInUser,
    ApiJson(req): ApiJson<UpdateCarRequest>,
) -> ApiResult<Json<CarDto>> {
    let id = Uuid::parse_str(&req.id)?;

    let repo = CarRepository::new(state.pool.clone());
    let stored = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Cannot update car", e))?
        .ok_or_else(|| ApiError::not_found(format!("Car {} not found", req.id)))?;

    if stored.owner.id != claims.user_id()? {
        return Err(ApiError::forbidden("Cannot update car"));
    }

    // Replace-by-id; owner and msgs stay with the stored record.
    let car = Car {
        id,
        vendor: req.vendor,
        speed: req.speed,
        price: req.price,
        owner: stored.owner,
        msgs: stored.msgs,
    };

    repo.update(&car)
        .await
        .map_err(|e| ApiError::internal("Cannot update car", e))?;

    Ok(Json(car.into()))
}

/// DELETE /api/car/:car_id
///
/// Remove a listing. Only the owner may delete it.
pub async fn delete_car(
    State(state): State<AppState>,
    LoggedInUser(claims): LoggedInUser,
    Path(car_id): Path<String>,
) -> ApiResult<Json<DeleteCarResponse>> {
    let id = Uuid::parse_str(&car_id)?;

    let repo = CarRepository::new(state.pool.clone());
    let stored = repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Cannot delete car", e))?
        .ok_or_else(|| ApiError::not_found(format!("Car {} not found", car_id)))?;

    if stored.owner.id != claims.user_id()? {
        return Err(ApiError::forbidden("Cannot delete car"));
    }

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::internal("Cannot delete car", e))?;
    if !deleted {
        return Err(ApiError::not_found(format!("Car {} not found", car_id)));
    }

    Ok(Json(DeleteCarResponse {
        msg: "Car removed!".to_string(),
        car_id,
    }))
}
