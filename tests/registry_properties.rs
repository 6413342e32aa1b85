//! Property-based and concurrency tests for the registry.

use identity_registry::storage::InMemoryStore;
use identity_registry::{Registry, RequestContext};
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any set of distinct non-empty names, each added exactly once,
    /// appears exactly once in the listing, in sorted order.
    #[test]
    fn prop_added_organizations_listed_once_in_order(
        names in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,15}", 0..8)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let registry = Registry::new(InMemoryStore::new());
            let ctx = RequestContext::with_generated_id();

            for name in &names {
                registry.add_organization(name, &ctx).await.unwrap();
            }

            let listed: Vec<String> = registry
                .organizations(None, &ctx)
                .await
                .unwrap()
                .into_iter()
                .map(|organization| organization.name)
                .collect();

            let mut expected: Vec<String> = names.iter().cloned().collect();
            expected.sort();

            prop_assert_eq!(listed, expected);
            Ok(())
        })?;
    }

    /// Re-adding any of the names fails and leaves the listing unchanged.
    #[test]
    fn prop_duplicate_add_never_changes_listing(
        names in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,15}", 1..6)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let registry = Registry::new(InMemoryStore::new());
            let ctx = RequestContext::with_generated_id();

            for name in &names {
                registry.add_organization(name, &ctx).await.unwrap();
            }
            let before = registry.organizations(None, &ctx).await.unwrap();

            for name in &names {
                let error = registry.add_organization(name, &ctx).await.unwrap_err();
                prop_assert!(error.is_integrity());
            }
            let after = registry.organizations(None, &ctx).await.unwrap();

            prop_assert_eq!(before, after);
            Ok(())
        })?;
    }
}

#[tokio::test]
async fn test_concurrent_adds_all_land() {
    let registry = Arc::new(Registry::new(InMemoryStore::new()));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                let ctx = RequestContext::with_generated_id();
                registry
                    .add_organization(&format!("Organization {i:02}"), &ctx)
                    .await
            })
        })
        .collect();

    for task in futures::future::join_all(tasks).await {
        task.unwrap().unwrap();
    }

    let listed = registry
        .organizations(None, &RequestContext::with_generated_id())
        .await
        .unwrap();
    assert_eq!(listed.len(), 16);
}
