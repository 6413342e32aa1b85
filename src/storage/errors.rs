//! Storage-specific error types for persistence operations.
//!
//! These errors stay below the service layer: the mutation and query
//! services translate them into the caller-visible registry errors, or
//! surface them wrapped as backend failures when they represent neither a
//! constraint violation nor a missing row.

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique key (organization name, domain, country code, identity id,
    /// enrollment tuple) is already taken.
    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// A foreign reference points at a row that does not exist.
    #[error("missing {kind} referenced by key: {key}")]
    MissingReference { kind: &'static str, key: String },

    /// The addressed row does not exist.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// Generic internal storage failure.
    #[error("internal storage error: {message}")]
    Internal { message: String },
}

impl StoreError {
    /// Create a new DuplicateKey error.
    pub fn duplicate_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    /// Create a new MissingReference error.
    pub fn missing_reference(kind: &'static str, key: impl Into<String>) -> Self {
        Self::MissingReference {
            kind,
            key: key.into(),
        }
    }

    /// Create a new NotFound error.
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if this error indicates a missing row or broken reference.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::MissingReference { .. })
    }
}
