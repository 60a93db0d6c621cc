//! Request and response envelopes for the Companion API

use serde::{Deserialize, Serialize};

/// Building manager credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Request to change a hallway's status.
/// Kept as text so casing can be normalized before validation.
#[derive(Debug, Deserialize)]
pub struct HallwayUpdateRequest {
    pub status: String,
}
