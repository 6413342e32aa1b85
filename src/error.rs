//! Error types for registry operations.
//!
//! Three error kinds cross the service boundary: [`ValidationError`] for bad
//! input, [`IntegrityError`] for uniqueness violations, and [`NotFoundError`]
//! for references to absent entities. All three surface their messages
//! verbatim to callers through the transparent [`RegistryError`] wrapper;
//! storage failures that are neither of these are reported separately.

/// Top-level error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Input data failed validation before any write happened
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A uniqueness constraint would have been violated
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// A referenced entity does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed in a way that is not a constraint violation
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wrap a storage backend error.
    pub fn storage<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(error))
    }

    /// Check whether this error carries a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check whether this error carries an integrity (uniqueness) failure.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }

    /// Check whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Validation errors raised before any data is persisted.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required string field was empty
    #[error("'{field}' cannot be an empty string")]
    EmptyString { field: String },

    /// A field value does not match its expected shape
    #[error("'{field}' must be {expected}")]
    InvalidFormat { field: String, expected: String },

    /// An identity carried no identifying data at all
    #[error("identity requires at least one of 'name', 'email' or 'username'")]
    EmptyIdentityData,

    /// An enrollment period with inverted bounds
    #[error("'start' date cannot be greater than 'end' date")]
    InvalidPeriod,
}

impl ValidationError {
    /// Create an empty-string error for the given field name.
    pub fn empty_string(field: impl Into<String>) -> Self {
        Self::EmptyString {
            field: field.into(),
        }
    }

    /// Create an invalid-format error for the given field name.
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// A uniqueness violation: the entity is already present in the registry.
#[derive(Debug, thiserror::Error)]
#[error("{entity} '{value}' already exists in the registry")]
pub struct IntegrityError {
    pub entity: &'static str,
    pub value: String,
}

impl IntegrityError {
    /// Create an integrity error for an arbitrary entity kind.
    pub fn new(entity: &'static str, value: impl Into<String>) -> Self {
        Self {
            entity,
            value: value.into(),
        }
    }

    /// Duplicate organization name.
    pub fn organization(name: impl Into<String>) -> Self {
        Self::new("Organization", name)
    }

    /// Duplicate domain string.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self::new("Domain", domain)
    }

    /// Duplicate country code.
    pub fn country(code: impl Into<String>) -> Self {
        Self::new("Country", code)
    }

    /// Duplicate identity id.
    pub fn identity(id: impl Into<String>) -> Self {
        Self::new("Identity", id)
    }

    /// Duplicate enrollment tuple.
    pub fn enrollment(descriptor: impl Into<String>) -> Self {
        Self::new("Enrollment", descriptor)
    }
}

/// A referenced entity is absent from the registry.
#[derive(Debug, thiserror::Error)]
#[error("{entity} matching query does not exist.")]
pub struct NotFoundError {
    pub entity: &'static str,
}

impl NotFoundError {
    /// Create a not-found error for an arbitrary entity kind.
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }

    /// Missing organization.
    pub fn organization() -> Self {
        Self::new("Organization")
    }

    /// Missing domain.
    pub fn domain() -> Self {
        Self::new("Domain")
    }

    /// Missing country.
    pub fn country() -> Self {
        Self::new("Country")
    }

    /// Missing unique identity.
    pub fn unique_identity() -> Self {
        Self::new("UniqueIdentity")
    }

    /// Missing enrollment.
    pub fn enrollment() -> Self {
        Self::new("Enrollment")
    }
}

// Result type aliases for convenience
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_message() {
        let error = ValidationError::empty_string("name");
        assert_eq!(error.to_string(), "'name' cannot be an empty string");
    }

    #[test]
    fn test_integrity_message() {
        let error = IntegrityError::organization("Example");
        assert_eq!(
            error.to_string(),
            "Organization 'Example' already exists in the registry"
        );
    }

    #[test]
    fn test_not_found_message() {
        let error = NotFoundError::organization();
        assert_eq!(
            error.to_string(),
            "Organization matching query does not exist."
        );
    }

    #[test]
    fn test_messages_surface_verbatim_through_wrapper() {
        let error = RegistryError::from(ValidationError::empty_string("name"));
        assert_eq!(error.to_string(), "'name' cannot be an empty string");

        let error = RegistryError::from(IntegrityError::organization("Example"));
        assert_eq!(
            error.to_string(),
            "Organization 'Example' already exists in the registry"
        );

        let error = RegistryError::from(NotFoundError::organization());
        assert_eq!(
            error.to_string(),
            "Organization matching query does not exist."
        );
    }

    #[test]
    fn test_error_classification() {
        let error = RegistryError::from(NotFoundError::domain());
        assert!(error.is_not_found());
        assert!(!error.is_validation());
        assert!(!error.is_integrity());
    }
}
