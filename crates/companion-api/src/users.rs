//! Stub user store holding the single sample user

use serde::Serialize;
use theia_common::{Contact, Settings, User};

/// Response wrapper for user endpoints
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Holds the default user built at startup
pub struct UserStore {
    default_user: User,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(sample_user())
    }
}

impl UserStore {
    pub fn new(default_user: User) -> Self {
        Self { default_user }
    }

    pub fn get_default(&self) -> &User {
        &self.default_user
    }

    /// Returns the existing default user; no new user is allocated
    pub fn create(&self) -> UserEnvelope {
        UserEnvelope {
            user: self.default_user.clone(),
        }
    }
}

/// Sample user with three caregiver contacts
pub fn sample_user() -> User {
    User {
        id: 1,
        name: "Test User".to_string(),
        email: Some("test@example.com".to_string()),
        settings: Settings::default(),
        contacts: vec![
            Contact::new("Alice Anderson", "+1-555-0101", Some("sister"), "sms"),
            Contact::new("Bob Brown", "+1-555-0202", Some("neighbor"), "call"),
            Contact::new("Carmen Carter", "+1-555-0303", Some("caregiver"), "sms"),
        ],
    }
}
