//! Read-only listing operations over the registry.

use crate::error::{RegistryError, RegistryResult};
use crate::registry::context::{ListParams, RequestContext};
use crate::registry::views::{
    CountryView, OrganizationView, UniqueIdentityView, assemble_organization,
    assemble_unique_identity,
};
use crate::storage::Store;
use log::debug;
use std::sync::Arc;

/// Read-only resolvers producing nested views of the registry.
///
/// Listings never fail on an empty store; they return empty vectors.
/// Orderings: organizations by name, unique identities by uuid, countries
/// by code. Nested identities and enrollments carry no ordering guarantee.
pub struct QueryService<S> {
    store: Arc<S>,
}

impl<S: Store> QueryService<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List organizations with their domains, ordered by name ascending.
    pub async fn organizations(
        &self,
        params: Option<&ListParams>,
        context: &RequestContext,
    ) -> RegistryResult<Vec<OrganizationView>> {
        let mut organizations = self
            .store
            .list_organizations()
            .await
            .map_err(RegistryError::storage)?;
        organizations.sort_by(|a, b| a.name.cmp(&b.name));

        if let Some(params) = params {
            organizations = params.apply(organizations);
        }

        let mut views = Vec::with_capacity(organizations.len());
        for organization in &organizations {
            let view = assemble_organization(self.store.as_ref(), organization)
                .await
                .map_err(RegistryError::storage)?;
            views.push(view);
        }

        debug!(
            "Listed {} organizations (request: {})",
            views.len(),
            context.request_id
        );
        Ok(views)
    }

    /// List unique identities with profile, identities and enrollments,
    /// ordered by uuid ascending.
    pub async fn unique_identities(
        &self,
        params: Option<&ListParams>,
        context: &RequestContext,
    ) -> RegistryResult<Vec<UniqueIdentityView>> {
        let mut uidentities = self
            .store
            .list_unique_identities()
            .await
            .map_err(RegistryError::storage)?;
        uidentities.sort_by(|a, b| a.uuid.cmp(&b.uuid));

        if let Some(params) = params {
            uidentities = params.apply(uidentities);
        }

        let mut views = Vec::with_capacity(uidentities.len());
        for uidentity in &uidentities {
            let view = assemble_unique_identity(self.store.as_ref(), &uidentity.uuid)
                .await
                .map_err(RegistryError::storage)?;
            views.push(view);
        }

        debug!(
            "Listed {} unique identities (request: {})",
            views.len(),
            context.request_id
        );
        Ok(views)
    }

    /// List countries ordered by code ascending.
    pub async fn countries(&self, context: &RequestContext) -> RegistryResult<Vec<CountryView>> {
        let mut countries = self
            .store
            .list_countries()
            .await
            .map_err(RegistryError::storage)?;
        countries.sort_by(|a, b| a.code.cmp(&b.code));

        debug!(
            "Listed {} countries (request: {})",
            countries.len(),
            context.request_id
        );
        Ok(countries.into_iter().map(CountryView::from).collect())
    }
}
