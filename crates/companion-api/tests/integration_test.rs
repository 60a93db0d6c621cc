//! Integration tests for the Companion API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use companion_api::{create_router, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn create_test_app() -> Router {
    create_router(AppState::new(Config::default()))
}

/// Send a request and decode the JSON body
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_root_and_ping() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Prototype API is running");

    let (status, json) = send(&app, "GET", "/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "pong" }));
}

#[tokio::test]
async fn test_manager_login() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/manager/login",
        Some(json!({ "username": "managername", "password": "111111" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = send(
        &app,
        "POST",
        "/manager/login",
        Some(json!({ "username": "managername", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "account not found");
}

#[tokio::test]
async fn test_manager_login_uses_configured_credentials() {
    let config = Config {
        manager_username: "facilities".to_string(),
        manager_password: "s3cret".to_string(),
        ..Config::default()
    };
    let app = create_router(AppState::new(config));

    let (status, _) = send(
        &app,
        "POST",
        "/manager/login",
        Some(json!({ "username": "managername", "password": "111111" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(
        &app,
        "POST",
        "/manager/login",
        Some(json!({ "username": "facilities", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_building_map_update_roundtrip() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/building-map", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "building": "default", "version": "v1", "blocked_nodes": [], "notes": null })
    );

    let update = json!({
        "building": "default",
        "version": "v2",
        "blocked_nodes": ["n5"],
        "notes": "flood"
    });
    let (status, json) = send(&app, "PUT", "/building-map", Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, update);

    let (_, json) = send(&app, "GET", "/building-map", None).await;
    assert_eq!(json, update);
}

#[tokio::test]
async fn test_building_map_unknown_building() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/building-map",
        Some(json!({ "building": "annex", "version": "v2" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unknown building");

    let (_, json) = send(&app, "GET", "/building-map", None).await;
    assert_eq!(json["version"], "v1");
}

#[tokio::test]
async fn test_list_hallways() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/building-map/hallways", None).await;
    assert_eq!(status, StatusCode::OK);

    let hallways = json.as_array().unwrap();
    assert_eq!(hallways.len(), 3);
    assert_eq!(hallways[0]["name"], "North Connector");
    assert_eq!(hallways[1]["status"], "under_construction");
    assert_eq!(hallways[2]["id"], 3);
}

#[tokio::test]
async fn test_update_hallway() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/building-map/hallways/2",
        Some(json!({ "status": "Available" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Atrium Passage");
    assert_eq!(json["status"], "available");

    let (_, json) = send(&app, "GET", "/building-map/hallways/2", None).await;
    assert_eq!(json["status"], "available");

    let (_, json) = send(&app, "GET", "/building-map/hallways", None).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(json[0]["status"], "available");
    assert_eq!(json[2]["status"], "available");
}

#[tokio::test]
async fn test_update_hallway_errors() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/building-map/hallways/99",
        Some(json!({ "status": "available" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "hallway not found");

    let (status, _) = send(
        &app,
        "PUT",
        "/building-map/hallways/1",
        Some(json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Status is checked before the hallway is looked up
    let (status, json) = send(
        &app,
        "PUT",
        "/building-map/hallways/99",
        Some(json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "status must be 'available' or 'under_construction'"
    );

    let (status, _) = send(&app, "GET", "/building-map/hallways/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guidance_locations() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/guidance",
        Some(json!({
            "current": { "building": "default", "floor": "1", "node": "n12" },
            "destination": { "building": "default", "floor": "2", "node": "n30" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["steps"].as_array().unwrap().len(), 5);
    assert_eq!(json["steps"][0], "Start at n12 on floor 1");
    assert_eq!(json["distance_m"], 25.0);
}

#[tokio::test]
async fn test_guidance_route() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/guidance/route",
        Some(json!({ "current_location": "A", "destination": "B" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["summary"],
        "From A to B, walk ahead 10 steps, then turn left, then continue straight."
    );
    let orders: Vec<i64> = json["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_guidance_demo() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/guidance/demo", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["summary"]
        .as_str()
        .unwrap()
        .starts_with("From Current hallway to Next classroom"));
}

#[tokio::test]
async fn test_emergency_tickets() {
    let app = create_test_app();

    let event = json!({
        "location": { "building": "default", "floor": "1", "node": "n3" },
        "fall_detected": true,
        "confidence": 0.8
    });

    for expected in ["case-1", "case-2", "case-3"] {
        let (status, json) = send(&app, "POST", "/emergency", Some(event.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ticket_id"], expected);
        assert_eq!(
            json["notified_contacts"],
            json!(["primary_caregiver", "facility_security"])
        );
    }
}

#[tokio::test]
async fn test_emergency_without_fall() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/emergency",
        Some(json!({
            "location": { "building": "default", "floor": "1", "node": "n3" },
            "fall_detected": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No emergency detected");

    let (_, json) = send(
        &app,
        "POST",
        "/emergency",
        Some(json!({
            "location": { "building": "default", "floor": "1", "node": "n3" },
            "fall_detected": true
        })),
    )
    .await;
    assert_eq!(json["ticket_id"], "case-1");
}

#[tokio::test]
async fn test_fall_alert() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/alerts/fall",
        Some(json!({ "user_id": 1, "latitude": 43.66, "longitude": -79.39 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Fall alert received. Contacts notified.");

    let notifications = json["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 3);
    assert_eq!(
        notifications[1],
        json!({ "contact": "Bob Brown", "channel": "call", "status": "sent" })
    );
}

#[tokio::test]
async fn test_create_user_returns_default() {
    let app = create_test_app();

    let (status, first) = send(&app, "POST", "/users/create", None).await;
    let (_, second) = send(&app, "POST", "/users/create", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["user"]["id"], 1);
    assert_eq!(first["user"]["email"], "test@example.com");
    assert_eq!(first["user"]["settings"]["theme"], "system");
    assert_eq!(first["user"]["contacts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_payload_rejected() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/alerts/fall",
        Some(json!({ "user_id": "not-a-number", "latitude": 0.0, "longitude": 0.0 })),
    )
    .await;

    assert!(status.is_client_error());
}
