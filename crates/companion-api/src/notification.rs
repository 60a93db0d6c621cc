//! Caregiver notification fan-out.
//!
//! Delivery is simulated: every contact gets a trace line and a "sent" result.

use theia_common::{Contact, DeliveryResult, User};
use tracing::info;

pub const STATUS_SENT: &str = "sent";

/// Dispatches notifications to a user's contacts
#[derive(Debug, Clone, Default)]
pub struct NotificationDispatcher;

impl NotificationDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Contacts to notify for a user, in stored order
    pub fn contacts_for(&self, user: &User) -> Vec<Contact> {
        user.contacts.clone()
    }

    /// Notify a single contact
    pub fn send(&self, contact: &Contact) -> DeliveryResult {
        info!(
            "Sending {} notification to {} at {}",
            contact.preferred_channel, contact.name, contact.phone
        );

        DeliveryResult {
            contact: contact.name.clone(),
            channel: contact.preferred_channel.clone(),
            status: STATUS_SENT.to_string(),
        }
    }

    /// Notify every contact of the user; one result per contact, same order
    pub fn notify_all(&self, user: &User) -> Vec<DeliveryResult> {
        self.contacts_for(user)
            .iter()
            .map(|contact| self.send(contact))
            .collect()
    }
}
