//! Canned turn-by-turn guidance.
//!
//! No pathfinding happens here: both forms return a fixed instruction
//! sequence and never touch shared state.

use theia_common::{GuidanceRequest, GuidanceResponse, GuidanceStep, RouteRequest, RouteResponse};

/// Placeholder distance reported for every location-pair route
pub const PLACEHOLDER_DISTANCE_M: f64 = 25.0;

pub const DEMO_CURRENT: &str = "Current hallway";
pub const DEMO_DESTINATION: &str = "Next classroom";

const ROUTE_INSTRUCTIONS: [&str; 3] = [
    "Walk ahead 10 steps",
    "Turn left",
    "Continue straight to your destination",
];

/// Guidance between two structured locations
pub fn guidance_for_locations(request: &GuidanceRequest) -> GuidanceResponse {
    let current = &request.current;
    let destination = &request.destination;

    let steps = vec![
        format!("Start at {} on floor {}", current.node, current.floor),
        "Proceed forward 10 meters".to_string(),
        "Turn right".to_string(),
        format!(
            "Continue to {} on floor {}",
            destination.node, destination.floor
        ),
        "Arrived".to_string(),
    ];

    GuidanceResponse {
        steps,
        distance_m: Some(PLACEHOLDER_DISTANCE_M),
    }
}

/// Guidance between two free-text places
pub fn route(request: &RouteRequest) -> RouteResponse {
    let summary = format!(
        "From {} to {}, walk ahead 10 steps, then turn left, then continue straight.",
        request.current_location, request.destination
    );

    let steps = ROUTE_INSTRUCTIONS
        .iter()
        .zip(1..)
        .map(|(instruction, order)| GuidanceStep {
            order,
            instruction: instruction.to_string(),
        })
        .collect();

    RouteResponse { summary, steps }
}

/// Route for a canned pair of places, used by the client's demo screen
pub fn demo_route() -> RouteResponse {
    route(&RouteRequest {
        current_location: DEMO_CURRENT.to_string(),
        destination: DEMO_DESTINATION.to_string(),
    })
}
