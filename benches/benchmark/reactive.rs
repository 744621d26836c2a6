use crate::common::{configure_criterion, lookup_user};
use criterion::{criterion_group, BenchmarkId, Criterion};
use outcome_rail::{tags, TagFilter};
use std::hint::black_box;

pub fn bench_dispatch_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("reactive/dispatch_table");

    for id in [0_u64, 1, 2] {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| {
                let mut status = 0_u16;
                lookup_user(black_box(id))
                    .on_success(tags!["cached"], |_, _| status = 200)
                    .on_failure(tags!["not_found"], |_, _| status = 404)
                    .on_failure(tags!["validation"], |_, _| status = 422)
                    .on_failure(tags![], |_, _| status = 500);
                black_box(status)
            })
        });
    }

    group.finish();
}

pub fn bench_filter_matching(c: &mut Criterion) {
    let outcome = lookup_user(1);
    let filter = TagFilter::from(["a", "b", "c", "validation"]);

    c.bench_function("reactive/filter_matches", |b| {
        b.iter(|| black_box(filter.matches(black_box(outcome.types()))))
    });
}

criterion_group! {
    name = reactive_benches;
    config = configure_criterion();
    targets = bench_dispatch_table, bench_filter_matching
}
