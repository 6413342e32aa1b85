//! The registry facade composing the query and mutation services.

use crate::error::RegistryResult;
use crate::model::ProfileChanges;
use crate::registry::context::{ListParams, RequestContext};
use crate::registry::mutations::MutationService;
use crate::registry::queries::QueryService;
use crate::registry::views::{
    CountryView, DomainView, EnrollmentView, OrganizationView, ProfileView, UniqueIdentityView,
};
use crate::storage::Store;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The single externally-callable surface of the registry.
///
/// A `Registry` holds one [`QueryService`] and one [`MutationService`]
/// sharing the same storage backend, and is constructed once at process
/// start. An API facade (GraphQL, REST) maps its operations onto these
/// methods one-to-one; everything here is a pass-through.
///
/// # Examples
///
/// ```rust
/// use identity_registry::registry::{Registry, RequestContext};
/// use identity_registry::storage::InMemoryStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = Registry::new(InMemoryStore::new());
/// let context = RequestContext::with_generated_id();
///
/// registry.add_organization("Bitergia", &context).await?;
/// let organizations = registry.organizations(None, &context).await?;
/// assert_eq!(organizations.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Registry<S: Store> {
    queries: QueryService<S>,
    mutations: MutationService<S>,
}

impl<S: Store> Registry<S> {
    /// Create a registry over the given storage backend.
    pub fn new(store: S) -> Self {
        Self::with_shared_store(Arc::new(store))
    }

    /// Create a registry over an already-shared storage backend.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self {
            queries: QueryService::new(Arc::clone(&store)),
            mutations: MutationService::new(store),
        }
    }

    /// Access the query service directly.
    pub fn queries(&self) -> &QueryService<S> {
        &self.queries
    }

    /// Access the mutation service directly.
    pub fn mutations(&self) -> &MutationService<S> {
        &self.mutations
    }

    // Queries

    /// List organizations with their domains, ordered by name.
    pub async fn organizations(
        &self,
        params: Option<&ListParams>,
        context: &RequestContext,
    ) -> RegistryResult<Vec<OrganizationView>> {
        self.queries.organizations(params, context).await
    }

    /// List unique identities with everything nested, ordered by uuid.
    pub async fn unique_identities(
        &self,
        params: Option<&ListParams>,
        context: &RequestContext,
    ) -> RegistryResult<Vec<UniqueIdentityView>> {
        self.queries.unique_identities(params, context).await
    }

    /// List countries ordered by code.
    pub async fn countries(&self, context: &RequestContext) -> RegistryResult<Vec<CountryView>> {
        self.queries.countries(context).await
    }

    // Mutations

    /// Add an organization.
    pub async fn add_organization(
        &self,
        name: &str,
        context: &RequestContext,
    ) -> RegistryResult<OrganizationView> {
        self.mutations.add_organization(name, context).await
    }

    /// Delete an organization with its cascade.
    pub async fn delete_organization(
        &self,
        name: &str,
        context: &RequestContext,
    ) -> RegistryResult<OrganizationView> {
        self.mutations.delete_organization(name, context).await
    }

    /// Attribute a domain to an organization.
    pub async fn add_domain(
        &self,
        organization: &str,
        domain: &str,
        is_top_domain: bool,
        context: &RequestContext,
    ) -> RegistryResult<DomainView> {
        self.mutations
            .add_domain(organization, domain, is_top_domain, context)
            .await
    }

    /// Remove a domain.
    pub async fn delete_domain(
        &self,
        domain: &str,
        context: &RequestContext,
    ) -> RegistryResult<DomainView> {
        self.mutations.delete_domain(domain, context).await
    }

    /// Register a country.
    pub async fn add_country(
        &self,
        code: &str,
        name: &str,
        alpha3: &str,
        context: &RequestContext,
    ) -> RegistryResult<CountryView> {
        self.mutations.add_country(code, name, alpha3, context).await
    }

    /// Record a raw identity observation.
    pub async fn add_identity(
        &self,
        source: &str,
        name: Option<String>,
        email: Option<String>,
        username: Option<String>,
        uuid: Option<&str>,
        context: &RequestContext,
    ) -> RegistryResult<String> {
        self.mutations
            .add_identity(source, name, email, username, uuid, context)
            .await
    }

    /// Delete a unique identity with its cascade.
    pub async fn delete_unique_identity(
        &self,
        uuid: &str,
        context: &RequestContext,
    ) -> RegistryResult<UniqueIdentityView> {
        self.mutations.delete_unique_identity(uuid, context).await
    }

    /// Update the profile of a unique identity.
    pub async fn update_profile(
        &self,
        uuid: &str,
        changes: ProfileChanges,
        context: &RequestContext,
    ) -> RegistryResult<ProfileView> {
        self.mutations.update_profile(uuid, changes, context).await
    }

    /// Enroll a unique identity at an organization.
    pub async fn enroll(
        &self,
        uuid: &str,
        organization: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        context: &RequestContext,
    ) -> RegistryResult<EnrollmentView> {
        self.mutations
            .enroll(uuid, organization, start, end, context)
            .await
    }

    /// Withdraw a unique identity from an organization.
    pub async fn withdraw(
        &self,
        uuid: &str,
        organization: &str,
        context: &RequestContext,
    ) -> RegistryResult<usize> {
        self.mutations.withdraw(uuid, organization, context).await
    }
}
