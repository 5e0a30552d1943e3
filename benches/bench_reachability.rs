use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use graphstore::SqliteStore;

const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);
const NODES: usize = 2_000;

struct PreparedStore {
    store: SqliteStore,
    start: i64,
    label: &'static str,
}

fn chain_store() -> PreparedStore {
    let store = SqliteStore::open_in_memory().expect("store");
    let ids: Vec<i64> = store
        .create_nodes(NODES)
        .expect("nodes")
        .into_iter()
        .map(|node| node.id)
        .collect();
    let pairs: Vec<(i64, i64)> = ids.windows(2).map(|pair| (pair[0], pair[1])).collect();
    store.create_edges(&pairs).expect("edges");
    PreparedStore {
        store,
        start: ids[0],
        label: "chain",
    }
}

fn ring_store() -> PreparedStore {
    let store = SqliteStore::open_in_memory().expect("store");
    let ids: Vec<i64> = store
        .create_nodes(NODES)
        .expect("nodes")
        .into_iter()
        .map(|node| node.id)
        .collect();
    let mut pairs: Vec<(i64, i64)> = ids.windows(2).map(|pair| (pair[0], pair[1])).collect();
    pairs.push((ids[NODES - 1], ids[0]));
    store.create_edges(&pairs).expect("edges");
    PreparedStore {
        store,
        start: ids[0],
        label: "ring",
    }
}

fn star_store() -> PreparedStore {
    let store = SqliteStore::open_in_memory().expect("store");
    let ids: Vec<i64> = store
        .create_nodes(NODES)
        .expect("nodes")
        .into_iter()
        .map(|node| node.id)
        .collect();
    let hub = ids[0];
    let pairs: Vec<(i64, i64)> = ids[1..].iter().map(|&leaf| (hub, leaf)).collect();
    store.create_edges(&pairs).expect("edges");
    PreparedStore {
        store,
        start: hub,
        label: "star",
    }
}

fn bench_reachable(c: &mut Criterion) {
    let prepared = vec![chain_store(), ring_store(), star_store()];
    let mut group = c.benchmark_group("reachable");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in &prepared {
        group.bench_function(case.label, |b| {
            b.iter(|| case.store.get_reachable_nodes(case.start).expect("reachable"));
        });
    }
    group.finish();
}

criterion_group!(
    name = reachability_benches;
    config = Criterion::default();
    targets = bench_reachable
);
criterion_main!(reachability_benches);
