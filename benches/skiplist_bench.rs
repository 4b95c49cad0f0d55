use std::collections::BTreeMap;

use criterion::*;
use rand::prelude::*;
use skiplist_kv::{CoinFlip, SkipList};

const N: u64 = 10_000;

fn shuffled_keys(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<u64> = (0..N).collect();
    keys.shuffle(&mut rng);
    keys
}

fn filled(keys: &[u64]) -> SkipList<u64, u64> {
    let mut sl = SkipList::with_generator(CoinFlip::seeded(1));
    for &k in keys {
        sl.insert(k, k);
    }
    sl
}

fn bench_insert(c: &mut Criterion) {
    let keys = shuffled_keys(7);
    let mut group = c.benchmark_group("insert");
    group.throughput(Throughput::Elements(N));
    group.bench_function("skiplist", |b| b.iter(|| filled(black_box(&keys))));
    group.bench_function("btreemap", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in black_box(&keys) {
                map.insert(k, k);
            }
            map
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let keys = shuffled_keys(11);
    let sl = filled(&keys);
    let mut rng = StdRng::seed_from_u64(13);
    c.bench_function("get_hit", |b| {
        b.iter_batched(
            || rng.gen_range(0..N),
            |k| black_box(sl.get(&k)),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("get_miss", |b| {
        b.iter_batched(
            || rng.gen_range(N..2 * N),
            |k| black_box(sl.get(&k)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_delete_reinsert(c: &mut Criterion) {
    let keys = shuffled_keys(17);
    let mut sl = filled(&keys);
    let mut rng = StdRng::seed_from_u64(19);
    c.bench_function("delete_reinsert", |b| {
        b.iter_batched(
            || rng.gen_range(0..N),
            |k| {
                sl.delete(&k);
                sl.insert(k, k);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_get, bench_delete_reinsert);
criterion_main!(benches);
