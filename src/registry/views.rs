//! Read-model views returned by the query and mutation services.
//!
//! Views are the externally visible shapes: nested, denormalized, with
//! camelCase field names on the wire and timestamps rendered as ISO-8601
//! with an explicit UTC offset. Assembly resolves foreign references
//! (country codes, organization names) into the nested records callers
//! expect.

use crate::model::{Country, Domain, Enrollment, Identity, Organization, Profile, utc_datetime};
use crate::storage::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An internet domain as listed under its organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainView {
    pub domain: String,
    #[serde(rename = "isTopDomain")]
    pub is_top_domain: bool,
}

impl From<Domain> for DomainView {
    fn from(domain: Domain) -> Self {
        Self {
            domain: domain.domain.into_string(),
            is_top_domain: domain.is_top_domain,
        }
    }
}

/// An organization with its domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationView {
    pub name: String,
    pub domains: Vec<DomainView>,
}

/// A country as nested under a profile or listed directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryView {
    pub code: String,
    pub name: String,
    pub alpha3: String,
}

impl From<Country> for CountryView {
    fn from(country: Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            alpha3: country.alpha3,
        }
    }
}

/// A profile with its country reference resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "isBot")]
    pub is_bot: bool,
    pub country: Option<CountryView>,
}

/// One raw identity as listed under its unique identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityView {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub source: String,
}

impl From<Identity> for IdentityView {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            username: identity.username,
            source: identity.source,
        }
    }
}

/// An enrollment with its organization reference resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentView {
    pub organization: String,
    #[serde(with = "utc_datetime")]
    pub start: DateTime<Utc>,
    #[serde(with = "utc_datetime")]
    pub end: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentView {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            organization: enrollment.organization.into_string(),
            start: enrollment.start,
            end: enrollment.end,
        }
    }
}

/// A unique identity with profile, identities and enrollments attached.
///
/// Identities and enrollments carry no ordering guarantee; callers sort
/// when they need determinism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdentityView {
    pub uuid: String,
    pub profile: Option<ProfileView>,
    pub identities: Vec<IdentityView>,
    pub enrollments: Vec<EnrollmentView>,
}

/// Assemble an organization view with its domains sorted by domain string.
pub(crate) async fn assemble_organization<S: Store>(
    store: &S,
    organization: &Organization,
) -> Result<OrganizationView, S::Error> {
    let mut domains = store.domains_of(organization.name.as_str()).await?;
    domains.sort_by(|a, b| a.domain.cmp(&b.domain));
    Ok(OrganizationView {
        name: organization.name.as_str().to_string(),
        domains: domains.into_iter().map(DomainView::from).collect(),
    })
}

/// Assemble a profile view, resolving its country code against the store.
pub(crate) async fn assemble_profile<S: Store>(
    store: &S,
    profile: Profile,
) -> Result<ProfileView, S::Error> {
    let country = match &profile.country_code {
        Some(code) => store.country(code).await?.map(CountryView::from),
        None => None,
    };
    Ok(ProfileView {
        name: profile.name,
        email: profile.email,
        gender: profile.gender,
        is_bot: profile.is_bot,
        country,
    })
}

/// Assemble a unique identity view with everything nested.
pub(crate) async fn assemble_unique_identity<S: Store>(
    store: &S,
    uuid: &str,
) -> Result<UniqueIdentityView, S::Error> {
    let profile = match store.profile_of(uuid).await? {
        Some(profile) => Some(assemble_profile(store, profile).await?),
        None => None,
    };
    let identities = store
        .identities_of(uuid)
        .await?
        .into_iter()
        .map(IdentityView::from)
        .collect();
    let enrollments = store
        .enrollments_of(uuid)
        .await?
        .into_iter()
        .map(EnrollmentView::from)
        .collect();

    Ok(UniqueIdentityView {
        uuid: uuid.to_string(),
        profile,
        identities,
        enrollments,
    })
}
