//! Query and mutation services plus the composing facade.
//!
//! The service layer owns everything callers can observe: input
//! validation, caller-visible error wording, view assembly, listing
//! orderings, and log correlation via request contexts. Storage backends
//! below it only persist rows and enforce constraints.

pub mod context;
pub mod core;
pub mod mutations;
pub mod queries;
pub mod views;

pub use context::{ListParams, RequestContext};
pub use core::Registry;
pub use mutations::MutationService;
pub use queries::QueryService;
pub use views::{
    CountryView, DomainView, EnrollmentView, IdentityView, OrganizationView, ProfileView,
    UniqueIdentityView,
};
