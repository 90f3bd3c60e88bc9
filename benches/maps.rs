use balanced_collections::linear_map::LinearMap;
use balanced_collections::red_black_tree::RedBlackMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn random_pairs() -> Vec<(i32, u32)> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut pairs = Vec::with_capacity(NUM_OF_OPERATIONS);
    for _ in 0..NUM_OF_OPERATIONS {
        let key = (rng.next_u32() % 1_000_000) as i32;
        let val = rng.next_u32();
        pairs.push((key, val));
    }
    pairs
}

fn bench_red_black_map_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench red_black_map insert", move |b| {
        b.iter(|| {
            let mut map = RedBlackMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val).ok();
            }
        })
    });
}

fn bench_red_black_map_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut map = RedBlackMap::new();
    for (key, val) in &pairs {
        map.insert(*key, *val).ok();
    }

    c.bench_function("bench red_black_map get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(*key).ok());
            }
        })
    });
}

fn bench_linear_map_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench linear_map insert", move |b| {
        b.iter(|| {
            let mut map = LinearMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
        })
    });
}

fn bench_linear_map_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut map = LinearMap::new();
    for (key, val) in &pairs {
        map.insert(*key, *val);
    }

    c.bench_function("bench linear_map get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(*key));
            }
        })
    });
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut map = BTreeMap::new();
    for (key, val) in &pairs {
        map.insert(*key, *val);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_red_black_map_insert,
    bench_red_black_map_get,
    bench_linear_map_insert,
    bench_linear_map_get,
    bench_btreemap_insert,
    bench_btreemap_get,
);
criterion_main!(benches);
