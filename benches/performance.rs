use std::future::ready;

use criterion::{criterion_group, criterion_main, Criterion};
use lazyq::{from_json_array, AsyncQuery, Query};

fn make_rows(rows: usize) -> Vec<(u32, f64)> {
    (0..rows)
        .map(|i| ((i % 97) as u32, (i % 10) as f64))
        .collect()
}

fn bench_sync_pipeline(c: &mut Criterion) {
    let query = Query::from(make_rows(10_000));
    c.bench_function("sync_filter_select_sum", |b| {
        b.iter(|| {
            query
                .filter(|(g, _), _| g % 2 == 0)
                .select(|(_, v), _| v * 2.0)
                .sum()
                .unwrap()
        })
    });
    c.bench_function("sync_order_by_distinct", |b| {
        b.iter(|| query.order_by_key(|(g, _)| *g).distinct_by(|(g, _)| *g).count())
    });
}

fn bench_async_pipeline(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let query = AsyncQuery::from(make_rows(10_000));
    c.bench_function("async_filter_order_by", |b| {
        b.iter(|| {
            rt.block_on(
                query
                    .filter(|(g, _), _| ready(g % 2 == 0))
                    .order_by_key(|(_, v)| ready(*v))
                    .take(100)
                    .unwrap()
                    .to_vec(),
            )
        })
    });
}

fn bench_json_adapter(c: &mut Criterion) {
    let text = serde_json::to_string(&(0..5_000).collect::<Vec<i64>>()).unwrap();
    c.bench_function("json_array_max", |b| {
        b.iter(|| from_json_array(&text).unwrap().max().unwrap())
    });
}

criterion_group!(pipelines, bench_sync_pipeline, bench_async_pipeline, bench_json_adapter);
criterion_main!(pipelines);
