//! In-memory storage backend for registry entities.
//!
//! Thread-safe implementation of the [`Store`] trait using `HashMap` tables
//! behind an async `RwLock`. Designed for testing, development, and
//! scenarios where persistence is not required.
//!
//! # Atomicity
//!
//! Every compound operation takes the write lock once for its whole
//! duration, so cascading removals are never observable half-applied.
//!
//! # Performance Characteristics
//!
//! * Keyed insert/fetch/remove: O(1) average case
//! * Listings and cascades: O(n) over the affected table

use crate::model::{
    Country, Domain, Enrollment, Identity, Organization, Profile, UniqueIdentity,
};
use crate::storage::{Store, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The relational-style tables held by the in-memory backend.
///
/// Keys mirror the unique columns of the data model: organization name,
/// domain string, country code, unique-identity uuid, identity id. Profiles
/// key on the owning uuid (1:1). Enrollments have no natural single key and
/// live in a plain vector.
#[derive(Debug, Default)]
struct Tables {
    organizations: HashMap<String, Organization>,
    domains: HashMap<String, Domain>,
    countries: HashMap<String, Country>,
    uidentities: HashMap<String, UniqueIdentity>,
    identities: HashMap<String, Identity>,
    profiles: HashMap<String, Profile>,
    enrollments: Vec<Enrollment>,
}

/// Thread-safe in-memory storage backend.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

/// Statistics about stored data, for debugging and monitoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStoreStats {
    pub organization_count: usize,
    pub domain_count: usize,
    pub unique_identity_count: usize,
    pub identity_count: usize,
    pub enrollment_count: usize,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    /// Get storage statistics.
    pub async fn stats(&self) -> InMemoryStoreStats {
        let tables = self.tables.read().await;
        InMemoryStoreStats {
            organization_count: tables.organizations.len(),
            domain_count: tables.domains.len(),
            unique_identity_count: tables.uidentities.len(),
            identity_count: tables.identities.len(),
            enrollment_count: tables.enrollments.len(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for InMemoryStore {
    type Error = StoreError;

    async fn insert_organization(&self, organization: Organization) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        let name = organization.name.as_str().to_string();
        if tables.organizations.contains_key(&name) {
            return Err(StoreError::duplicate_key("organization", name));
        }
        tables.organizations.insert(name, organization);
        Ok(())
    }

    async fn organization(&self, name: &str) -> Result<Option<Organization>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.organizations.get(name).cloned())
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.organizations.values().cloned().collect())
    }

    async fn remove_organization(&self, name: &str) -> Result<bool, Self::Error> {
        let mut tables = self.tables.write().await;
        if tables.organizations.remove(name).is_none() {
            return Ok(false);
        }
        tables
            .domains
            .retain(|_, domain| domain.organization.as_str() != name);
        tables
            .enrollments
            .retain(|enrollment| enrollment.organization.as_str() != name);
        Ok(true)
    }

    async fn insert_domain(&self, domain: Domain) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        let organization = domain.organization.as_str();
        if !tables.organizations.contains_key(organization) {
            return Err(StoreError::missing_reference("organization", organization));
        }
        let key = domain.domain.as_str().to_string();
        if tables.domains.contains_key(&key) {
            return Err(StoreError::duplicate_key("domain", key));
        }
        tables.domains.insert(key, domain);
        Ok(())
    }

    async fn domain(&self, domain: &str) -> Result<Option<Domain>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.domains.get(domain).cloned())
    }

    async fn remove_domain(&self, domain: &str) -> Result<bool, Self::Error> {
        let mut tables = self.tables.write().await;
        Ok(tables.domains.remove(domain).is_some())
    }

    async fn domains_of(&self, organization: &str) -> Result<Vec<Domain>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .domains
            .values()
            .filter(|domain| domain.organization.as_str() == organization)
            .cloned()
            .collect())
    }

    async fn insert_country(&self, country: Country) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        if tables.countries.contains_key(&country.code) {
            return Err(StoreError::duplicate_key("country", country.code));
        }
        tables.countries.insert(country.code.clone(), country);
        Ok(())
    }

    async fn country(&self, code: &str) -> Result<Option<Country>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.countries.get(code).cloned())
    }

    async fn list_countries(&self) -> Result<Vec<Country>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.countries.values().cloned().collect())
    }

    async fn insert_unique_identity(&self, uidentity: UniqueIdentity) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        if tables.uidentities.contains_key(&uidentity.uuid) {
            return Err(StoreError::duplicate_key("unique identity", uidentity.uuid));
        }
        tables.uidentities.insert(uidentity.uuid.clone(), uidentity);
        Ok(())
    }

    async fn unique_identity(&self, uuid: &str) -> Result<Option<UniqueIdentity>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.uidentities.get(uuid).cloned())
    }

    async fn list_unique_identities(&self) -> Result<Vec<UniqueIdentity>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.uidentities.values().cloned().collect())
    }

    async fn remove_unique_identity(&self, uuid: &str) -> Result<bool, Self::Error> {
        let mut tables = self.tables.write().await;
        if tables.uidentities.remove(uuid).is_none() {
            return Ok(false);
        }
        tables.identities.retain(|_, identity| identity.uuid != uuid);
        tables.profiles.remove(uuid);
        tables
            .enrollments
            .retain(|enrollment| enrollment.uuid != uuid);
        Ok(true)
    }

    async fn insert_identity(&self, identity: Identity) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        if !tables.uidentities.contains_key(&identity.uuid) {
            return Err(StoreError::missing_reference(
                "unique identity",
                identity.uuid,
            ));
        }
        if tables.identities.contains_key(&identity.id) {
            return Err(StoreError::duplicate_key("identity", identity.id));
        }
        tables.identities.insert(identity.id.clone(), identity);
        Ok(())
    }

    async fn identity(&self, id: &str) -> Result<Option<Identity>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.identities.get(id).cloned())
    }

    async fn identities_of(&self, uuid: &str) -> Result<Vec<Identity>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .identities
            .values()
            .filter(|identity| identity.uuid == uuid)
            .cloned()
            .collect())
    }

    async fn set_profile(&self, uuid: &str, profile: Profile) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        if !tables.uidentities.contains_key(uuid) {
            return Err(StoreError::missing_reference("unique identity", uuid));
        }
        tables.profiles.insert(uuid.to_string(), profile);
        Ok(())
    }

    async fn profile_of(&self, uuid: &str) -> Result<Option<Profile>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.get(uuid).cloned())
    }

    async fn insert_enrollment(&self, enrollment: Enrollment) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        if !tables.uidentities.contains_key(&enrollment.uuid) {
            return Err(StoreError::missing_reference(
                "unique identity",
                enrollment.uuid,
            ));
        }
        if !tables
            .organizations
            .contains_key(enrollment.organization.as_str())
        {
            return Err(StoreError::missing_reference(
                "organization",
                enrollment.organization.as_str(),
            ));
        }
        if tables.enrollments.contains(&enrollment) {
            return Err(StoreError::duplicate_key(
                "enrollment",
                format!("{}-{}", enrollment.uuid, enrollment.organization),
            ));
        }
        tables.enrollments.push(enrollment);
        Ok(())
    }

    async fn enrollments_of(&self, uuid: &str) -> Result<Vec<Enrollment>, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|enrollment| enrollment.uuid == uuid)
            .cloned()
            .collect())
    }

    async fn remove_enrollments(
        &self,
        uuid: &str,
        organization: &str,
    ) -> Result<usize, Self::Error> {
        let mut tables = self.tables.write().await;
        let before = tables.enrollments.len();
        tables.enrollments.retain(|enrollment| {
            enrollment.uuid != uuid || enrollment.organization.as_str() != organization
        });
        Ok(before - tables.enrollments.len())
    }

    async fn count_enrollments(&self, organization: &str) -> Result<usize, Self::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|enrollment| enrollment.organization.as_str() == organization)
            .count())
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        let mut tables = self.tables.write().await;
        *tables = Tables::default();
        Ok(())
    }
}
