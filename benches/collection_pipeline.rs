use criterion::{criterion_group, criterion_main, Criterion};
use memquery::{Collection, SortDirection};

use crate::utils::generate_sample_records;

mod utils;

fn criterion_benchmark(c: &mut Criterion) {
    let records = generate_sample_records(10_000);

    c.bench_function("filter + order + limit (ten thousand entries)", |b| {
        b.iter(|| {
            let page = Collection::from(records.clone())
                .filter(|record| record.size > 4096)
                .order_by(|record| record.name.clone(), SortDirection::Ascending)
                .then_by(|record| record.size, SortDirection::Descending)
                .limit(100);
            assert_eq!(page.count(), 100);
        });
    });

    c.bench_function("group by mime type (ten thousand entries)", |b| {
        b.iter(|| {
            let groups = Collection::from(records.clone())
                .group_by_with(|record| record.mime_type, |record| record.id);
            assert_eq!(groups.len(), 4);
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
