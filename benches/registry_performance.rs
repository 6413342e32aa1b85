//! Registry listing benchmarks.
//!
//! Measures the assembly cost of the nested organization listing as the
//! registry grows.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use identity_registry::storage::InMemoryStore;
use identity_registry::{Registry, RequestContext};
use tokio::runtime::Runtime;

fn populate(rt: &Runtime, size: usize) -> Registry<InMemoryStore> {
    rt.block_on(async {
        let registry = Registry::new(InMemoryStore::new());
        let ctx = RequestContext::with_generated_id();
        for i in 0..size {
            let name = format!("Organization {i:04}");
            registry.add_organization(&name, &ctx).await.unwrap();
            registry
                .add_domain(&name, &format!("org{i:04}.example.com"), true, &ctx)
                .await
                .unwrap();
        }
        registry
    })
}

fn bench_organizations_listing(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("organizations_listing");

    for size in [10usize, 100, 1000] {
        let registry = populate(&rt, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let ctx = RequestContext::with_generated_id();
            b.iter(|| {
                rt.block_on(registry.organizations(None, &ctx))
                    .unwrap()
                    .len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_organizations_listing);
criterion_main!(benches);
