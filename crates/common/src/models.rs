//! Domain records shared by the companion API and its clients

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A point in a building's indoor map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub building: String,
    pub floor: String,

    /// Abstract node id in the indoor map
    pub node: String,
}

/// UI theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Per-user privacy and notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub share_location: bool,
    pub share_health_data: bool,
    pub notifications_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            share_location: true,
            share_health_data: false,
            notifications_enabled: true,
            theme: Theme::System,
        }
    }
}

fn default_channel() -> String {
    "sms".to_string()
}

/// Someone to notify when the user needs help
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,

    #[serde(default)]
    pub relation: Option<String>,

    /// Delivery channel, e.g. "sms" or "call"
    #[serde(default = "default_channel")]
    pub preferred_channel: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        relation: Option<&str>,
        preferred_channel: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            relation: relation.map(str::to_string),
            preferred_channel: preferred_channel.into(),
        }
    }
}

/// A mobile client user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub settings: Settings,

    /// Ordered; notifications go out in this order
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Current state of the building map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStatus {
    pub building: String,
    pub version: String,
    pub blocked_nodes: Vec<String>,
    pub notes: Option<String>,
}

impl Default for MapStatus {
    fn default() -> Self {
        Self {
            building: "default".to_string(),
            version: "v1".to_string(),
            blocked_nodes: Vec::new(),
            notes: None,
        }
    }
}

/// Replacement map state submitted by a building manager
#[derive(Debug, Clone, Deserialize)]
pub struct MapUpdate {
    pub building: String,
    pub version: String,

    #[serde(default)]
    pub blocked_nodes: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<MapUpdate> for MapStatus {
    fn from(update: MapUpdate) -> Self {
        Self {
            building: update.building,
            version: update.version,
            blocked_nodes: update.blocked_nodes,
            notes: update.notes,
        }
    }
}

/// Whether a hallway can be walked through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HallwayStatus {
    Available,
    UnderConstruction,
}

impl HallwayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HallwayStatus::Available => "available",
            HallwayStatus::UnderConstruction => "under_construction",
        }
    }
}

impl fmt::Display for HallwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HallwayStatus {
    type Err = Error;

    /// Case-insensitive: "Available" parses as `Available`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(HallwayStatus::Available),
            "under_construction" => Ok(HallwayStatus::UnderConstruction),
            _ => Err(Error::invalid_request(
                "status must be 'available' or 'under_construction'",
            )),
        }
    }
}

/// A hallway segment tracked by the map registry.
///
/// Fields are read-only; a status change produces a new record through
/// [`Hallway::with_status`], so id and name never change after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hallway {
    id: i64,
    name: String,
    status: HallwayStatus,
    #[serde(default)]
    description: Option<String>,
}

impl Hallway {
    pub fn new(id: i64, name: impl Into<String>, status: HallwayStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy of this hallway carrying a different status
    pub fn with_status(&self, status: HallwayStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> HallwayStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Guidance between two structured locations
#[derive(Debug, Clone, Deserialize)]
pub struct GuidanceRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub current: Location,
    pub destination: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceResponse {
    pub steps: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

/// Guidance between two free-text places, as sent by the mobile client
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    pub current_location: String,
    pub destination: String,
}

/// One numbered instruction; `order` starts at 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceStep {
    pub order: u32,
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResponse {
    pub summary: String,
    pub steps: Vec<GuidanceStep>,
}

/// Emergency report from the client
#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyEvent {
    pub location: Location,
    pub fall_detected: bool,

    /// Detector confidence, nominally 0..1 but not range-checked
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Acknowledgment issued for an accepted emergency event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyAck {
    pub notified_contacts: Vec<String>,
    pub ticket_id: String,
}

fn default_source() -> String {
    "android_app".to_string()
}

/// Fall alert raised by the phone's fall detector
#[derive(Debug, Clone, Deserialize)]
pub struct FallAlert {
    pub user_id: i64,
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default = "default_source")]
    pub source: String,
}

/// Outcome of notifying one contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    pub contact: String,
    pub channel: String,
    pub status: String,
}
