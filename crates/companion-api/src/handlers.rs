//! API request handlers for the Companion API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use theia_common::{
    EmergencyAck, EmergencyEvent, FallAlert, GuidanceRequest, GuidanceResponse, Hallway,
    MapStatus, MapUpdate, RouteRequest, RouteResponse,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    config::Config,
    emergency::{self, EmergencyIntake, FallAlertResponse},
    guidance,
    models::{HallwayUpdateRequest, LoginRequest, LoginResponse},
    notification::NotificationDispatcher,
    registry::MapRegistry,
    users::{UserEnvelope, UserStore},
};

/// Shared application state.
/// Each mutable slice sits behind its own lock.
pub struct AppState {
    pub registry: Mutex<MapRegistry>,
    pub emergencies: Mutex<EmergencyIntake>,
    pub users: UserStore,
    pub dispatcher: NotificationDispatcher,
    pub config: Config,
}

impl AppState {
    /// Create state seeded with the default map, hallways and user
    pub fn new(config: Config) -> Self {
        Self {
            registry: Mutex::new(MapRegistry::default()),
            emergencies: Mutex::new(EmergencyIntake::new()),
            users: UserStore::default(),
            dispatcher: NotificationDispatcher::new(),
            config,
        }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<theia_common::Error> for ApiError {
    fn from(err: theia_common::Error) -> Self {
        let status = match &err {
            theia_common::Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            theia_common::Error::NotFound(_) => StatusCode::NOT_FOUND,
        };

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Service banner
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Prototype API is running"
    }))
}

pub async fn ping_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "pong"
    }))
}

/// Building manager login
pub async fn manager_login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let config = &state.config;

    if payload.username == config.manager_username && payload.password == config.manager_password
    {
        info!("Manager {} logged in", payload.username);
        return Ok(Json(LoginResponse { success: true }));
    }

    warn!("Rejected manager login for {}", payload.username);
    Err(ApiError {
        status: StatusCode::NOT_FOUND,
        message: "account not found".to_string(),
    })
}

/// Get the current building map
pub async fn get_map_handler(State(state): State<Arc<AppState>>) -> Json<MapStatus> {
    let registry = state.registry.lock().await;
    Json(registry.get_map())
}

/// Replace the building map
pub async fn update_map_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MapUpdate>,
) -> Result<Json<MapStatus>, ApiError> {
    info!(
        "Updating map for building {} to version {}",
        payload.building, payload.version
    );

    let mut registry = state.registry.lock().await;
    let map = registry.update_map(payload)?;

    Ok(Json(map))
}

/// List all hallways
pub async fn list_hallways_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Hallway>> {
    let registry = state.registry.lock().await;
    Json(registry.list_hallways())
}

/// Get a single hallway
pub async fn get_hallway_handler(
    State(state): State<Arc<AppState>>,
    Path(hallway_id): Path<i64>,
) -> Result<Json<Hallway>, ApiError> {
    let registry = state.registry.lock().await;
    let hallway = registry.get_hallway(hallway_id)?;

    Ok(Json(hallway))
}

/// Change a hallway's status
pub async fn update_hallway_handler(
    State(state): State<Arc<AppState>>,
    Path(hallway_id): Path<i64>,
    Json(payload): Json<HallwayUpdateRequest>,
) -> Result<Json<Hallway>, ApiError> {
    info!("Setting hallway {} to {}", hallway_id, payload.status);

    let mut registry = state.registry.lock().await;
    let hallway = registry.update_hallway(hallway_id, &payload.status)?;

    Ok(Json(hallway))
}

/// Guidance between two structured locations
pub async fn guidance_handler(Json(payload): Json<GuidanceRequest>) -> Json<GuidanceResponse> {
    info!(
        "Guidance requested from {} to {}",
        payload.current.node, payload.destination.node
    );

    Json(guidance::guidance_for_locations(&payload))
}

/// Guidance between two free-text places
pub async fn route_handler(Json(payload): Json<RouteRequest>) -> Json<RouteResponse> {
    info!(
        "Route requested from {} to {}",
        payload.current_location, payload.destination
    );

    Json(guidance::route(&payload))
}

/// Demo route with canned places
pub async fn demo_route_handler() -> Json<RouteResponse> {
    Json(guidance::demo_route())
}

/// Open an emergency ticket
pub async fn emergency_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EmergencyEvent>,
) -> Result<Json<EmergencyAck>, ApiError> {
    let mut emergencies = state.emergencies.lock().await;
    let ack = emergencies.trigger(&payload)?;

    Ok(Json(ack))
}

/// Receive a fall alert and notify the default user's contacts
pub async fn fall_alert_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FallAlert>,
) -> Json<FallAlertResponse> {
    let response = emergency::receive_fall(
        &payload,
        state.users.get_default(),
        &state.dispatcher,
    );

    Json(response)
}

/// Return the default user
pub async fn create_user_handler(State(state): State<Arc<AppState>>) -> Json<UserEnvelope> {
    Json(state.users.create())
}
