//! Storage abstraction layer for registry entities.
//!
//! The [`Store`] trait defines typed persistence primitives that are
//! service-agnostic: backends enforce uniqueness and referential integrity
//! and perform cascading removals atomically, while everything the caller
//! sees as business logic (input validation, error wording, view assembly)
//! stays in the service layer.
//!
//! # Architecture
//!
//! The storage layer is responsible for:
//! - Typed insert/fetch/remove operations on entity rows
//! - Uniqueness and referential-integrity enforcement
//! - Atomic cascades when a root aggregate is removed
//!
//! The storage layer is NOT responsible for:
//! - Input validation (empty names, inverted periods)
//! - Caller-visible error messages
//! - View assembly or ordering guarantees of listings
//!
//! # Atomicity
//!
//! Compound operations (`remove_organization`, `remove_unique_identity`)
//! must never be observable half-applied. The in-memory backend takes a
//! single write lock for the whole cascade; a relational backend would use
//! one transaction.
//!
//! # Example Usage
//!
//! ```rust
//! use identity_registry::storage::{InMemoryStore, Store};
//! use identity_registry::model::Organization;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//!
//! store
//!     .insert_organization(Organization::new("Bitergia".to_string())?)
//!     .await?;
//! let listed = store.list_organizations().await?;
//! assert_eq!(listed.len(), 1);
//!
//! let removed = store.remove_organization("Bitergia").await?;
//! assert!(removed);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StoreError;
pub use in_memory::{InMemoryStore, InMemoryStoreStats};

use crate::model::{
    Country, Domain, Enrollment, Identity, Organization, Profile, UniqueIdentity,
};
use std::future::Future;

/// Core trait for storage backends holding registry entities.
///
/// All operations return futures so implementations can be backed by real
/// databases. Reads never fail for missing rows (they return `None` or an
/// empty vector); writes fail with backend errors when a constraint would
/// be violated.
pub trait Store: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    // Organizations

    /// Insert a new organization. Fails if the name is taken.
    fn insert_organization(
        &self,
        organization: Organization,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch an organization by name.
    fn organization(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Organization>, Self::Error>> + Send;

    /// List every organization, in no particular order.
    fn list_organizations(
        &self,
    ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send;

    /// Remove an organization, cascading to its domains and to every
    /// enrollment referencing it. Returns whether the organization existed.
    ///
    /// The cascade is atomic: no observer may see the organization gone
    /// while its domains or enrollments remain.
    fn remove_organization(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    // Domains

    /// Insert a new domain. Fails if the domain string is taken or the
    /// owning organization does not exist.
    fn insert_domain(
        &self,
        domain: Domain,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch a domain by its domain string.
    fn domain(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Option<Domain>, Self::Error>> + Send;

    /// Remove a domain by its domain string. Returns whether it existed.
    fn remove_domain(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// List the domains owned by an organization.
    fn domains_of(
        &self,
        organization: &str,
    ) -> impl Future<Output = Result<Vec<Domain>, Self::Error>> + Send;

    // Countries

    /// Insert a new country. Fails if the code is taken.
    fn insert_country(
        &self,
        country: Country,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch a country by ISO code.
    fn country(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send;

    /// List every country, in no particular order.
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send;

    // Unique identities

    /// Insert a new unique identity. Fails if the uuid is taken.
    fn insert_unique_identity(
        &self,
        uidentity: UniqueIdentity,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch a unique identity by uuid.
    fn unique_identity(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Option<UniqueIdentity>, Self::Error>> + Send;

    /// List every unique identity, in no particular order.
    fn list_unique_identities(
        &self,
    ) -> impl Future<Output = Result<Vec<UniqueIdentity>, Self::Error>> + Send;

    /// Remove a unique identity, cascading to its identities, profile and
    /// enrollments. Returns whether it existed. Atomic like
    /// [`remove_organization`](Store::remove_organization).
    fn remove_unique_identity(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    // Identities

    /// Insert a raw identity. Fails if the id is taken or the owning unique
    /// identity does not exist.
    fn insert_identity(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch an identity by id.
    fn identity(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Identity>, Self::Error>> + Send;

    /// List the identities merged under a unique identity.
    fn identities_of(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Vec<Identity>, Self::Error>> + Send;

    // Profiles

    /// Attach or replace the profile of a unique identity. Fails if the
    /// unique identity does not exist.
    fn set_profile(
        &self,
        uuid: &str,
        profile: Profile,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch the profile of a unique identity.
    fn profile_of(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send;

    // Enrollments

    /// Insert an enrollment. Fails if the identical (uuid, organization,
    /// start, end) tuple exists, or if either endpoint is missing.
    fn insert_enrollment(
        &self,
        enrollment: Enrollment,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// List the enrollments of a unique identity.
    fn enrollments_of(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Vec<Enrollment>, Self::Error>> + Send;

    /// Remove every enrollment linking a unique identity to an
    /// organization. Returns how many were removed.
    fn remove_enrollments(
        &self,
        uuid: &str,
        organization: &str,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Count the enrollments referencing an organization.
    fn count_enrollments(
        &self,
        organization: &str,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    // Maintenance

    /// Clear all data from storage. Primarily intended for tests.
    fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
