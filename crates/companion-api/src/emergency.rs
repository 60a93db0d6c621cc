//! Emergency and fall-alert intake

use serde::Serialize;
use theia_common::{DeliveryResult, EmergencyAck, EmergencyEvent, Error, FallAlert, Result, User};
use tracing::{info, warn};

use crate::notification::NotificationDispatcher;

/// Placeholder recipients recorded on every emergency ticket
pub const NOTIFIED_CONTACTS: [&str; 2] = ["primary_caregiver", "facility_security"];

/// Append-only log of issued emergency tickets
#[derive(Debug, Default)]
pub struct EmergencyIntake {
    log: Vec<EmergencyAck>,
}

impl EmergencyIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an emergency event and issue the next ticket.
    /// Events without a detected fall are rejected and not logged.
    pub fn trigger(&mut self, event: &EmergencyEvent) -> Result<EmergencyAck> {
        if !event.fall_detected {
            return Err(Error::invalid_request("No emergency detected"));
        }

        let ack = EmergencyAck {
            notified_contacts: NOTIFIED_CONTACTS.iter().map(|c| c.to_string()).collect(),
            ticket_id: format!("case-{}", self.log.len() + 1),
        };

        warn!(
            ticket_id = %ack.ticket_id,
            building = %event.location.building,
            floor = %event.location.floor,
            node = %event.location.node,
            confidence = ?event.confidence,
            "Emergency ticket opened"
        );

        self.log.push(ack.clone());
        Ok(ack)
    }

    /// Number of tickets issued so far
    pub fn count(&self) -> usize {
        self.log.len()
    }
}

/// Aggregate response for a fall alert
#[derive(Debug, Clone, Serialize)]
pub struct FallAlertResponse {
    pub status: String,
    pub message: String,
    pub notifications: Vec<DeliveryResult>,
}

/// Log a fall alert and notify every contact of `user`. Never fails.
pub fn receive_fall(
    alert: &FallAlert,
    user: &User,
    dispatcher: &NotificationDispatcher,
) -> FallAlertResponse {
    info!(
        user_id = alert.user_id,
        latitude = alert.latitude,
        longitude = alert.longitude,
        source = %alert.source,
        "Fall alert received"
    );

    let notifications = dispatcher.notify_all(user);

    FallAlertResponse {
        status: "ok".to_string(),
        message: "Fall alert received. Contacts notified.".to_string(),
        notifications,
    }
}
