//! State-changing operations over the registry.
//!
//! Every mutation validates its input before touching storage, checks the
//! uniqueness and existence conditions it is responsible for, and performs
//! its writes through the storage backend's atomic primitives. A failed
//! mutation leaves the store unchanged.

use crate::error::{IntegrityError, NotFoundError, RegistryError, RegistryResult};
use crate::model::{
    Country, Domain, Enrollment, Identity, Organization, OrganizationName, Profile,
    ProfileChanges, UniqueIdentity, default_enrollment_end, default_enrollment_start,
};
use crate::registry::context::RequestContext;
use crate::registry::views::{
    CountryView, DomainView, EnrollmentView, OrganizationView, ProfileView, UniqueIdentityView,
    assemble_organization, assemble_profile, assemble_unique_identity,
};
use crate::storage::Store;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

/// State-changing operations with validation and integrity errors.
pub struct MutationService<S> {
    store: Arc<S>,
}

impl<S: Store> MutationService<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Add an organization to the registry.
    ///
    /// Fails with a validation error on an empty name and with an integrity
    /// error when the name is already registered. Returns the new
    /// organization's view, which carries no domains yet.
    pub async fn add_organization(
        &self,
        name: &str,
        context: &RequestContext,
    ) -> RegistryResult<OrganizationView> {
        let organization = Organization::new(name.to_string())?;

        if self
            .store
            .organization(name)
            .await
            .map_err(RegistryError::storage)?
            .is_some()
        {
            warn!(
                "Rejected duplicate organization '{}' (request: {})",
                name, context.request_id
            );
            return Err(IntegrityError::organization(name).into());
        }

        self.store
            .insert_organization(organization)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Added organization '{}' (request: {})",
            name, context.request_id
        );
        Ok(OrganizationView {
            name: name.to_string(),
            domains: Vec::new(),
        })
    }

    /// Delete an organization, cascading to its domains and enrollments.
    ///
    /// Enrollments linking the same identities to other organizations are
    /// preserved. Returns the organization's pre-delete view.
    pub async fn delete_organization(
        &self,
        name: &str,
        context: &RequestContext,
    ) -> RegistryResult<OrganizationView> {
        let organization = self
            .store
            .organization(name)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(NotFoundError::organization)?;

        let view = assemble_organization(self.store.as_ref(), &organization)
            .await
            .map_err(RegistryError::storage)?;

        self.store
            .remove_organization(name)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Deleted organization '{}' with {} domains (request: {})",
            name,
            view.domains.len(),
            context.request_id
        );
        Ok(view)
    }

    /// Attribute an internet domain to an organization.
    pub async fn add_domain(
        &self,
        organization: &str,
        domain: &str,
        is_top_domain: bool,
        context: &RequestContext,
    ) -> RegistryResult<DomainView> {
        let record = Domain::new(domain.to_string(), is_top_domain, organization.to_string())?;

        if self
            .store
            .organization(organization)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::organization().into());
        }
        if self
            .store
            .domain(domain)
            .await
            .map_err(RegistryError::storage)?
            .is_some()
        {
            warn!(
                "Rejected duplicate domain '{}' (request: {})",
                domain, context.request_id
            );
            return Err(IntegrityError::domain(domain).into());
        }

        let view = DomainView::from(record.clone());
        self.store
            .insert_domain(record)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Added domain '{}' to organization '{}' (request: {})",
            domain, organization, context.request_id
        );
        Ok(view)
    }

    /// Remove a domain from the registry.
    pub async fn delete_domain(
        &self,
        domain: &str,
        context: &RequestContext,
    ) -> RegistryResult<DomainView> {
        let record = self
            .store
            .domain(domain)
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(NotFoundError::domain)?;

        self.store
            .remove_domain(domain)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Deleted domain '{}' (request: {})",
            domain, context.request_id
        );
        Ok(DomainView::from(record))
    }

    /// Register a country for profiles to reference.
    pub async fn add_country(
        &self,
        code: &str,
        name: &str,
        alpha3: &str,
        context: &RequestContext,
    ) -> RegistryResult<CountryView> {
        let country = Country::new(code.to_string(), name.to_string(), alpha3.to_string())?;

        if self
            .store
            .country(&country.code)
            .await
            .map_err(RegistryError::storage)?
            .is_some()
        {
            return Err(IntegrityError::country(&country.code).into());
        }

        let view = CountryView::from(country.clone());
        self.store
            .insert_country(country)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Added country '{}' (request: {})",
            view.code, context.request_id
        );
        Ok(view)
    }

    /// Record a raw identity observation.
    ///
    /// With a `uuid`, the identity is merged under that existing unique
    /// identity. Without one, a fresh unique identity is created whose uuid
    /// is the identity's own id, with an empty profile attached. Returns
    /// the identity id.
    pub async fn add_identity(
        &self,
        source: &str,
        name: Option<String>,
        email: Option<String>,
        username: Option<String>,
        uuid: Option<&str>,
        context: &RequestContext,
    ) -> RegistryResult<String> {
        let identity = Identity::from_data(
            source.to_string(),
            name,
            email,
            username,
            uuid.map(str::to_string),
        )?;

        if let Some(uuid) = uuid
            && self
                .store
                .unique_identity(uuid)
                .await
                .map_err(RegistryError::storage)?
                .is_none()
        {
            return Err(NotFoundError::unique_identity().into());
        }
        if self
            .store
            .identity(&identity.id)
            .await
            .map_err(RegistryError::storage)?
            .is_some()
        {
            warn!(
                "Rejected duplicate identity '{}' (request: {})",
                identity.id, context.request_id
            );
            return Err(IntegrityError::identity(&identity.id).into());
        }

        // Standalone identity: create the owning aggregate first
        if uuid.is_none()
            && self
                .store
                .unique_identity(&identity.uuid)
                .await
                .map_err(RegistryError::storage)?
                .is_none()
        {
            self.store
                .insert_unique_identity(UniqueIdentity::new(identity.uuid.clone())?)
                .await
                .map_err(RegistryError::storage)?;
            self.store
                .set_profile(&identity.uuid, Profile::default())
                .await
                .map_err(RegistryError::storage)?;
        }

        let id = identity.id.clone();
        self.store
            .insert_identity(identity)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Added identity '{}' from source '{}' (request: {})",
            id, source, context.request_id
        );
        Ok(id)
    }

    /// Delete a unique identity, cascading to its identities, profile and
    /// enrollments. Returns the pre-delete view.
    pub async fn delete_unique_identity(
        &self,
        uuid: &str,
        context: &RequestContext,
    ) -> RegistryResult<UniqueIdentityView> {
        if self
            .store
            .unique_identity(uuid)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::unique_identity().into());
        }

        let view = assemble_unique_identity(self.store.as_ref(), uuid)
            .await
            .map_err(RegistryError::storage)?;

        self.store
            .remove_unique_identity(uuid)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Deleted unique identity '{}' (request: {})",
            uuid, context.request_id
        );
        Ok(view)
    }

    /// Update the profile of a unique identity.
    ///
    /// Only the supplied fields change. A supplied country code must be
    /// registered. Returns the updated profile view.
    pub async fn update_profile(
        &self,
        uuid: &str,
        changes: ProfileChanges,
        context: &RequestContext,
    ) -> RegistryResult<ProfileView> {
        if self
            .store
            .unique_identity(uuid)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::unique_identity().into());
        }
        if let Some(code) = &changes.country_code
            && self
                .store
                .country(code)
                .await
                .map_err(RegistryError::storage)?
                .is_none()
        {
            return Err(NotFoundError::country().into());
        }

        let current = self
            .store
            .profile_of(uuid)
            .await
            .map_err(RegistryError::storage)?
            .unwrap_or_default();
        let updated = current.apply(changes);

        self.store
            .set_profile(uuid, updated.clone())
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Updated profile of '{}' (request: {})",
            uuid, context.request_id
        );
        assemble_profile(self.store.as_ref(), updated)
            .await
            .map_err(RegistryError::storage)
    }

    /// Enroll a unique identity at an organization.
    ///
    /// Omitted bounds default to the open-ended 1900/2100 period. Fails
    /// when the period is inverted, when either endpoint is missing, or
    /// when the identical enrollment already exists.
    pub async fn enroll(
        &self,
        uuid: &str,
        organization: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        context: &RequestContext,
    ) -> RegistryResult<EnrollmentView> {
        let organization_name = OrganizationName::new(organization.to_string())?;
        let enrollment = Enrollment::new(
            uuid.to_string(),
            organization_name,
            start.unwrap_or_else(default_enrollment_start),
            end.unwrap_or_else(default_enrollment_end),
        )?;

        if self
            .store
            .unique_identity(uuid)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::unique_identity().into());
        }
        if self
            .store
            .organization(organization)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::organization().into());
        }

        let existing = self
            .store
            .enrollments_of(uuid)
            .await
            .map_err(RegistryError::storage)?;
        if existing.contains(&enrollment) {
            warn!(
                "Rejected duplicate enrollment of '{}' at '{}' (request: {})",
                uuid, organization, context.request_id
            );
            return Err(IntegrityError::enrollment(format!("{uuid}-{organization}")).into());
        }

        let view = EnrollmentView::from(enrollment.clone());
        self.store
            .insert_enrollment(enrollment)
            .await
            .map_err(RegistryError::storage)?;

        info!(
            "Enrolled '{}' at '{}' (request: {})",
            uuid, organization, context.request_id
        );
        Ok(view)
    }

    /// Withdraw a unique identity from an organization.
    ///
    /// Removes every enrollment for the pair and returns how many were
    /// removed; fails when no enrollment links them.
    pub async fn withdraw(
        &self,
        uuid: &str,
        organization: &str,
        context: &RequestContext,
    ) -> RegistryResult<usize> {
        if self
            .store
            .unique_identity(uuid)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::unique_identity().into());
        }
        if self
            .store
            .organization(organization)
            .await
            .map_err(RegistryError::storage)?
            .is_none()
        {
            return Err(NotFoundError::organization().into());
        }

        let removed = self
            .store
            .remove_enrollments(uuid, organization)
            .await
            .map_err(RegistryError::storage)?;
        if removed == 0 {
            return Err(NotFoundError::enrollment().into());
        }

        info!(
            "Withdrew '{}' from '{}', removed {} enrollments (request: {})",
            uuid, organization, removed, context.request_id
        );
        Ok(removed)
    }
}
