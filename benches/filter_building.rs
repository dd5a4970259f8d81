use criterion::{criterion_group, criterion_main, Criterion};
use memquery::{AdvancedFilterBuilder, FilterInput, RangeBounds};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build and serialize a nested filter", |b| {
        b.iter(|| {
            let filter = AdvancedFilterBuilder::new()
                .and(
                    AdvancedFilterBuilder::new()
                        .equals("dataSetId", Some(42))
                        .prefix("name", Some("report"))
                        .contains_any("sourceFile|assetIds", Some(vec![1, 2, 3]))
                        .range("size", RangeBounds::new().gte(1024).lt(1_048_576))
                        .search("content", "pressure test")
                        .exists("uploadedTime", FilterInput::lazy(|| Some(true)))
                )
                .build()
                .unwrap();
            let payload = serde_json::to_string(&filter).unwrap();
            assert!(!payload.is_empty());
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
