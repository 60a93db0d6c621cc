pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{
    Contact, DeliveryResult, EmergencyAck, EmergencyEvent, FallAlert, GuidanceRequest,
    GuidanceResponse, GuidanceStep, Hallway, HallwayStatus, Location, MapStatus, MapUpdate,
    RouteRequest, RouteResponse, Settings, Theme, User,
};
