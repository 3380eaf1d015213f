//! Integration tests for the cars API

mod common;

use crate::common::{
    create_car, create_test_app_state, empty_request, json_request, read_json, signup_user,
};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use cb_server::build_router;

fn authed_json_request(
    method: &str,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: &str, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_cars_empty() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app.oneshot(empty_request("GET", "/api/car")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_car_requires_login() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/car",
            serde_json::json!({ "vendor": "Tesla", "speed": 200, "price": 50000 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_then_create_car_coerces_numeric_strings() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (user, cookie) = signup_user(&app, "a").await;

    // speed and price arrive as strings, persist as numbers
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/car",
            &cookie,
            serde_json::json!({ "vendor": "Tesla", "speed": "200", "price": "50000" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["price"], 50000.0);
    assert_eq!(json["speed"], 200.0);
    assert_eq!(json["owner"]["_id"], user["_id"]);
    assert_eq!(json["owner"]["fullname"], "a Fullname");

    // And the record is readable by anyone
    let car_id = json["_id"].as_str().unwrap();
    let response = app
        .oneshot(empty_request("GET", &format!("/api/car/{}", car_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["vendor"], "Tesla");
}

#[tokio::test]
async fn test_create_car_with_non_numeric_price_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;

    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/api/car",
            &cookie,
            serde_json::json!({ "vendor": "Tesla", "speed": 200, "price": "cheap" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_cars_filters_intersect() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;
    create_car(&app, &cookie, "Mazda", 100.0).await;
    create_car(&app, &cookie, "mazda sport", 500.0).await;
    create_car(&app, &cookie, "Honda", 100.0).await;

    // Vendor substring match is case-insensitive
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/car?txt=AZD"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 2);

    // Price ceiling is inclusive
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/car?maxPrice=100"))
        .await
        .unwrap();
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 2);

    // Combined filters intersect
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/car?txt=mazda&maxPrice=100"))
        .await
        .unwrap();
    let json = read_json(response).await;
    let cars = json.as_array().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["vendor"], "Mazda");
}

#[tokio::test]
async fn test_list_cars_ignores_non_numeric_max_price() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;
    create_car(&app, &cookie, "Mazda", 100.0).await;
    create_car(&app, &cookie, "Honda", 500.0).await;

    let response = app
        .oneshot(empty_request("GET", "/api/car?maxPrice=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_car_unknown_or_invalid_id_maps_to_400() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/car/{}", uuid::Uuid::new_v4()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(empty_request("GET", "/api/car/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_car_by_owner_replaces_fields_and_keeps_owner() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (user, cookie) = signup_user(&app, "a").await;
    let car = create_car(&app, &cookie, "Mazda", 100.0).await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/car",
            &cookie,
            serde_json::json!({
                "_id": car["_id"],
                "vendor": "Mazda 6",
                "speed": "140",
                "price": 150,
                "owner": car["owner"],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["vendor"], "Mazda 6");
    assert_eq!(json["speed"], 140.0);
    assert_eq!(json["price"], 150.0);
    assert_eq!(json["owner"]["_id"], user["_id"]);
}

#[tokio::test]
async fn test_update_car_by_non_owner_rejected_and_record_unchanged() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_owner, owner_cookie) = signup_user(&app, "owner").await;
    let (_other, other_cookie) = signup_user(&app, "other").await;
    let car = create_car(&app, &owner_cookie, "Mazda", 100.0).await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/car",
            &other_cookie,
            serde_json::json!({
                "_id": car["_id"],
                "vendor": "Stolen",
                "speed": 1,
                "price": 1,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Record unchanged
    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/car/{}", car["_id"].as_str().unwrap()),
        ))
        .await
        .unwrap();
    let json = read_json(response).await;
    assert_eq!(json["vendor"], "Mazda");
    assert_eq!(json["price"], 100.0);
}

#[tokio::test]
async fn test_update_car_unknown_id_maps_to_400() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/api/car",
            &cookie,
            serde_json::json!({
                "_id": uuid::Uuid::new_v4().to_string(),
                "vendor": "Ghost",
                "speed": 1,
                "price": 1,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_car_requires_login() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/car/{}", uuid::Uuid::new_v4()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_car_by_owner_removes_it() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;
    let car = create_car(&app, &cookie, "Mazda", 100.0).await;
    let car_id = car["_id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("/api/car/{}", car_id),
            &cookie,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["carId"], car_id);
    assert!(json["msg"].as_str().is_some());

    // A subsequent lookup misses
    let response = app
        .oneshot(empty_request("GET", &format!("/api/car/{}", car_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_car_by_non_owner_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_owner, owner_cookie) = signup_user(&app, "owner").await;
    let (_other, other_cookie) = signup_user(&app, "other").await;
    let car = create_car(&app, &owner_cookie, "Mazda", 100.0).await;
    let car_id = car["_id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("/api/car/{}", car_id),
            &other_cookie,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Still there
    let response = app
        .oneshot(empty_request("GET", &format!("/api/car/{}", car_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_unknown_car_maps_to_400() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_user, cookie) = signup_user(&app, "a").await;

    let response = app
        .oneshot(authed_request(
            "DELETE",
            &format!("/api/car/{}", uuid::Uuid::new_v4()),
            &cookie,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unmatched_route_serves_static_index() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(empty_request("GET", "/some/frontend/route"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
