//! Shared fixtures for integration tests.

use identity_registry::storage::InMemoryStore;
use identity_registry::{Registry, RequestContext};

/// Initialize test logging once per binary; repeated calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a registry over a fresh in-memory store.
pub fn empty_registry() -> Registry<InMemoryStore> {
    Registry::new(InMemoryStore::new())
}

/// Create a request context for a test call.
pub fn context() -> RequestContext {
    RequestContext::with_generated_id()
}

/// Populate the three-organization fixture: Example with two domains,
/// Bitergia with one, LibreSoft with none.
#[allow(dead_code)]
pub async fn populate_organizations(registry: &Registry<InMemoryStore>) {
    let ctx = context();
    registry.add_organization("Example", &ctx).await.unwrap();
    registry
        .add_domain("Example", "example.com", false, &ctx)
        .await
        .unwrap();
    registry
        .add_domain("Example", "example.org", false, &ctx)
        .await
        .unwrap();
    registry.add_organization("Bitergia", &ctx).await.unwrap();
    registry
        .add_domain("Bitergia", "bitergia.com", false, &ctx)
        .await
        .unwrap();
    registry.add_organization("LibreSoft", &ctx).await.unwrap();
}
