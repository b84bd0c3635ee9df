use aerovia_api::config::BusinessRules;
use aerovia_api::state::{AppState, AuthConfig};
use aerovia_api::app;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn test_app() -> Router {
    let state = AppState::new(
        AuthConfig {
            secret: "test-secret".into(),
            expiration: 3600,
        },
        BusinessRules::default(),
    );
    app(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, email: &str, admin: bool) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/v1/auth/register",
        None,
        Some(json!({
            "email": email,
            "username": email.split('@').next().unwrap(),
            "password": "hunter22",
            "admin": admin,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn book_and_cancel_through_the_api() {
    let app = test_app();
    let admin = register(&app, "admin@example.com", true).await;
    let ana = register(&app, "ana@example.com", false).await;

    let (status, _) = send(
        &app,
        "POST",
        "/v1/flights",
        Some(&admin),
        Some(json!({ "origin": "Porto", "destination": "Paris", "capacity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/v1/bookings",
        Some(&ana),
        Some(json!({
            "origin": "Porto",
            "destination": "Paris",
            "travel_date": "2022-03-12",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["reservation_id"].as_u64().unwrap();

    let (status, body) = send(&app, "GET", "/v1/bookings", Some(&ana), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/bookings/{}", id),
        Some(&ana),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Cancelling the same id twice is a not-found, not a silent no-op.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/bookings/{}", id),
        Some(&ana),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_booking_is_a_conflict() {
    let app = test_app();
    let admin = register(&app, "admin@example.com", true).await;
    let ana = register(&app, "ana@example.com", false).await;

    send(
        &app,
        "POST",
        "/v1/flights",
        Some(&admin),
        Some(json!({ "origin": "Porto", "destination": "Paris", "capacity": 5 })),
    )
    .await;

    let booking = json!({
        "origin": "Porto",
        "destination": "Paris",
        "travel_date": "2022-03-12",
    });
    let (status, _) = send(&app, "POST", "/v1/bookings", Some(&ana), Some(booking.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/v1/bookings", Some(&ana), Some(booking)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn authorization_is_enforced() {
    let app = test_app();
    let passenger = register(&app, "ana@example.com", false).await;

    // No token at all.
    let (status, _) = send(&app, "GET", "/v1/bookings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A passenger cannot add flights or close the day.
    let (status, _) = send(
        &app,
        "POST",
        "/v1/flights",
        Some(&passenger),
        Some(json!({ "origin": "Porto", "destination": "Paris", "capacity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "POST", "/v1/day/close", Some(&passenger), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn closed_day_rejects_bookings_until_reopened() {
    let app = test_app();
    let admin = register(&app, "admin@example.com", true).await;
    let ana = register(&app, "ana@example.com", false).await;

    send(
        &app,
        "POST",
        "/v1/flights",
        Some(&admin),
        Some(json!({ "origin": "Porto", "destination": "Paris", "capacity": 5 })),
    )
    .await;

    let (status, _) = send(&app, "POST", "/v1/day/close", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let booking = json!({
        "origin": "Porto",
        "destination": "Paris",
        "travel_date": "2022-03-12",
    });
    let (status, _) = send(&app, "POST", "/v1/bookings", Some(&ana), Some(booking.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "POST", "/v1/day/open", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/v1/bookings", Some(&ana), Some(booking)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn stopped_itinerary_reports_committed_legs() {
    let app = test_app();
    let admin = register(&app, "admin@example.com", true).await;
    let ana = register(&app, "ana@example.com", false).await;

    for (origin, destination, capacity) in
        [("A", "B", 5), ("B", "C", 1), ("C", "D", 5)]
    {
        send(
            &app,
            "POST",
            "/v1/flights",
            Some(&admin),
            Some(json!({ "origin": origin, "destination": destination, "capacity": capacity })),
        )
        .await;
    }

    // Burn the only seat on the middle leg.
    let (status, _) = send(
        &app,
        "POST",
        "/v1/bookings",
        Some(&admin),
        Some(json!({ "origin": "B", "destination": "C", "travel_date": "2022-03-12" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/v1/bookings/itinerary",
        Some(&ana),
        Some(json!({
            "stops": ["A", "B", "C", "D"],
            "start_date": "2022-03-10",
            "end_date": "2022-03-20",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["committed"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn route_search_lists_connections() {
    let app = test_app();
    let admin = register(&app, "admin@example.com", true).await;

    for (origin, destination) in [("OPO", "CDG"), ("OPO", "LIS"), ("LIS", "CDG")] {
        send(
            &app,
            "POST",
            "/v1/flights",
            Some(&admin),
            Some(json!({ "origin": origin, "destination": destination, "capacity": 5 })),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "GET",
        "/v1/flights/routes?origin=OPO&destination=CDG",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["routes"].as_array().unwrap().len(), 2);
}
