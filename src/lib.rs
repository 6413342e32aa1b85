//! Identity and organization registry library.
//!
//! Provides a typed identity-management data model (organizations, domains,
//! unique identities, profiles, enrollments) with query/mutation services
//! over pluggable storage backends. Transport concerns (GraphQL, REST,
//! request lifecycles) stay with the hosting application; this crate is the
//! surface such a facade calls into.
//!
//! # Core Components
//!
//! - [`Registry`] - Facade composing the query and mutation services
//! - [`Store`] - Trait for implementing storage backends
//! - [`InMemoryStore`] - Thread-safe in-memory backend for tests and development
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use identity_registry::{Registry, RequestContext};
//! use identity_registry::storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::new(InMemoryStore::new());
//! let context = RequestContext::with_generated_id();
//!
//! registry.add_organization("Bitergia", &context).await?;
//! registry.add_domain("Bitergia", "bitergia.com", true, &context).await?;
//!
//! for organization in registry.organizations(None, &context).await? {
//!     println!("{} ({} domains)", organization.name, organization.domains.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod registry;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::{
    IntegrityError, NotFoundError, RegistryError, RegistryResult, ValidationError,
    ValidationResult,
};
pub use registry::{
    CountryView, DomainView, EnrollmentView, IdentityView, ListParams, MutationService,
    OrganizationView, ProfileView, QueryService, Registry, RequestContext, UniqueIdentityView,
};
pub use storage::{InMemoryStore, Store, StoreError};
