//! Unique identities and the raw identity records merged under them.
//!
//! A [`UniqueIdentity`] is the merged aggregate uniting raw [`Identity`]
//! records believed to represent the same person. Identity ids are derived
//! deterministically from the identity's content, so submitting the same
//! observation twice yields the same id.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A merged identity aggregate.
///
/// The uuid is unique and immutable once created. Deleting a unique
/// identity cascades to its identities, profile and enrollments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdentity {
    pub uuid: String,
}

impl UniqueIdentity {
    /// Create a unique identity aggregate, rejecting an empty uuid.
    pub fn new(uuid: String) -> ValidationResult<Self> {
        if uuid.is_empty() {
            return Err(ValidationError::empty_string("uuid"));
        }
        Ok(Self { uuid })
    }
}

/// One raw observed identity record, e.g. from a commit author field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub source: String,
    /// uuid of the owning unique identity
    pub uuid: String,
}

impl Identity {
    /// Build an identity from untrusted input, deriving its id from content.
    ///
    /// Empty strings in the optional fields are treated as absent. The
    /// record must carry a non-empty source and at least one of name, email
    /// or username. Without an owning `uuid` the identity stands alone: its
    /// uuid is its own id.
    pub fn from_data(
        source: String,
        name: Option<String>,
        email: Option<String>,
        username: Option<String>,
        uuid: Option<String>,
    ) -> ValidationResult<Self> {
        if source.is_empty() {
            return Err(ValidationError::empty_string("source"));
        }

        let name = none_if_empty(name);
        let email = none_if_empty(email);
        let username = none_if_empty(username);

        if name.is_none() && email.is_none() && username.is_none() {
            return Err(ValidationError::EmptyIdentityData);
        }

        let id = identity_id(&source, name.as_deref(), email.as_deref(), username.as_deref());
        let uuid = uuid.unwrap_or_else(|| id.clone());

        Ok(Self {
            id,
            name,
            email,
            username,
            source,
            uuid,
        })
    }
}

/// Derive the deterministic id of an identity from its content.
///
/// The id is the lowercase-hex SHA-256 digest over the source and the three
/// identifying fields, with a separator that keeps `("ab", "c")` distinct
/// from `("a", "bc")`.
pub fn identity_id(
    source: &str,
    name: Option<&str>,
    email: Option<&str>,
    username: Option<&str>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    for field in [name, email, username] {
        hasher.update(b"\x1f");
        if let Some(value) = field {
            hasher.update(value.as_bytes());
        }
    }
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_id_is_deterministic() {
        let a = identity_id("scm", Some("John Smith"), Some("jsmith@example.com"), None);
        let b = identity_id("scm", Some("John Smith"), Some("jsmith@example.com"), None);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identity_id_distinguishes_fields() {
        let a = identity_id("scm", Some("ab"), Some("c"), None);
        let b = identity_id("scm", Some("a"), Some("bc"), None);
        assert_ne!(a, b);

        let name_only = identity_id("scm", Some("x"), None, None);
        let email_only = identity_id("scm", None, Some("x"), None);
        assert_ne!(name_only, email_only);
    }

    #[test]
    fn test_identity_requires_source() {
        let error = Identity::from_data(
            String::new(),
            Some("John".to_string()),
            None,
            None,
            Some("AAAA".to_string()),
        )
        .unwrap_err();
        assert_eq!(error.to_string(), "'source' cannot be an empty string");
    }

    #[test]
    fn test_identity_requires_some_data() {
        let error = Identity::from_data(
            "scm".to_string(),
            None,
            Some(String::new()),
            None,
            Some("AAAA".to_string()),
        )
        .unwrap_err();
        assert!(matches!(error, ValidationError::EmptyIdentityData));
    }

    #[test]
    fn test_empty_optional_fields_become_absent() {
        let identity = Identity::from_data(
            "scm".to_string(),
            Some("John Smith".to_string()),
            Some(String::new()),
            None,
            Some("AAAA".to_string()),
        )
        .unwrap();
        assert_eq!(identity.name.as_deref(), Some("John Smith"));
        assert_eq!(identity.email, None);
    }
}
