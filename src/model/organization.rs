//! Organization and domain records.
//!
//! This module provides the organization aggregate root and the internet
//! domains attributed to it, together with validated name value objects.
//! The value objects enforce their invariants at construction time, so an
//! `Organization` holding an empty name cannot exist in the system.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated organization name.
///
/// Organization names are the primary key of the organization registry.
/// The only structural rule is that they must not be empty; the registry
/// enforces uniqueness separately.
///
/// ## Examples
///
/// ```rust
/// use identity_registry::model::OrganizationName;
///
/// let name = OrganizationName::new("Bitergia".to_string()).unwrap();
/// assert_eq!(name.as_str(), "Bitergia");
///
/// assert!(OrganizationName::new(String::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrganizationName(String);

impl OrganizationName {
    /// Create a new organization name, rejecting empty strings.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(ValidationError::empty_string("name"));
        }
        Ok(Self(value))
    }

    /// Create an organization name without validation.
    ///
    /// Only for values already known to be valid, such as names read back
    /// from storage.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Get the string representation of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrganizationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for OrganizationName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrganizationName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// A validated internet domain string.
///
/// Same rules as [`OrganizationName`]: non-empty at construction, unique in
/// the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(String);

impl DomainName {
    /// Create a new domain name, rejecting empty strings.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(ValidationError::empty_string("domain"));
        }
        Ok(Self(value))
    }

    /// Create a domain name without validation.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Get the string representation of the domain.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the domain.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DomainName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DomainName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// An organization registered in the registry.
///
/// Organizations are a root aggregate: deleting one cascades to its domains
/// and to the enrollments referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: OrganizationName,
}

impl Organization {
    /// Create an organization from an untrusted name.
    pub fn new(name: String) -> ValidationResult<Self> {
        Ok(Self {
            name: OrganizationName::new(name)?,
        })
    }
}

/// An internet domain attributed to an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub domain: DomainName,
    #[serde(rename = "isTopDomain")]
    pub is_top_domain: bool,
    pub organization: OrganizationName,
}

impl Domain {
    /// Create a domain record from untrusted strings.
    pub fn new(domain: String, is_top_domain: bool, organization: String) -> ValidationResult<Self> {
        Ok(Self {
            domain: DomainName::new(domain)?,
            is_top_domain,
            organization: OrganizationName::new(organization)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_organization_name() {
        let name = OrganizationName::new("Example".to_string()).unwrap();
        assert_eq!(name.as_str(), "Example");
        assert_eq!(name.to_string(), "Example");
    }

    #[test]
    fn test_empty_organization_name_rejected() {
        let error = OrganizationName::new(String::new()).unwrap_err();
        assert_eq!(error.to_string(), "'name' cannot be an empty string");
    }

    #[test]
    fn test_empty_domain_rejected() {
        let error = DomainName::new(String::new()).unwrap_err();
        assert_eq!(error.to_string(), "'domain' cannot be an empty string");
    }

    #[test]
    fn test_domain_serialization_uses_camel_case() {
        let domain = Domain::new("example.com".to_string(), true, "Example".to_string()).unwrap();
        let value = serde_json::to_value(&domain).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["isTopDomain"], true);
    }

    #[test]
    fn test_name_deserialization_validates() {
        let result: Result<OrganizationName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
