//! Profile records attached to unique identities.

use serde::{Deserialize, Serialize};

/// The curated profile of a unique identity (1:1).
///
/// Every field except the bot flag is optional; absent values pass through
/// listings as nulls rather than sentinel strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "isBot")]
    pub is_bot: bool,
    pub gender: Option<String>,
    /// ISO 3166 code of the profile's country, resolved at query time
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
}

/// A partial update to a profile.
///
/// Only supplied fields change; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_bot: Option<bool>,
    pub gender: Option<String>,
    pub country_code: Option<String>,
}

impl Profile {
    /// Apply a changeset, returning the updated profile.
    pub fn apply(mut self, changes: ProfileChanges) -> Self {
        if let Some(name) = changes.name {
            self.name = Some(name);
        }
        if let Some(email) = changes.email {
            self.email = Some(email);
        }
        if let Some(is_bot) = changes.is_bot {
            self.is_bot = is_bot;
        }
        if let Some(gender) = changes.gender {
            self.gender = Some(gender);
        }
        if let Some(country_code) = changes.country_code {
            self.country_code = Some(country_code);
        }
        self
    }
}
