//! Companion API
//!
//! Prototype backend for the Theia indoor navigation and safety app.
//! All state is in memory and resets when the process restarts.
//!
//! ## Endpoints
//!
//! - `GET /health`, `GET /`, `GET /ping` - Liveness
//! - `POST /manager/login` - Building manager login
//! - `GET|PUT /building-map` - Read or replace the map status
//! - `GET /building-map/hallways` - List hallways
//! - `GET|PUT /building-map/hallways/{id}` - Read or update one hallway
//! - `POST /guidance` - Guidance between two structured locations
//! - `POST /guidance/route` - Guidance between two free-text places
//! - `GET /guidance/demo` - Canned guidance
//! - `POST /emergency` - Open an emergency ticket
//! - `POST /alerts/fall` - Fall alert with caregiver notification
//! - `POST /users/create` - Default user profile

pub mod config;
pub mod emergency;
pub mod guidance;
pub mod handlers;
pub mod models;
pub mod notification;
pub mod registry;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use notification::NotificationDispatcher;
pub use registry::MapRegistry;
pub use users::UserStore;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        // System
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/ping", get(handlers::ping_handler))
        .route("/manager/login", post(handlers::manager_login_handler))
        // Building map
        .route(
            "/building-map",
            get(handlers::get_map_handler).put(handlers::update_map_handler),
        )
        .route(
            "/building-map/hallways",
            get(handlers::list_hallways_handler),
        )
        .route(
            "/building-map/hallways/{hallway_id}",
            get(handlers::get_hallway_handler).put(handlers::update_hallway_handler),
        )
        // Guidance
        .route("/guidance", post(handlers::guidance_handler))
        .route("/guidance/route", post(handlers::route_handler))
        .route("/guidance/demo", get(handlers::demo_route_handler))
        // Emergencies
        .route("/emergency", post(handlers::emergency_handler))
        .route("/alerts/fall", post(handlers::fall_alert_handler))
        // Users
        .route("/users/create", post(handlers::create_user_handler))
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
