use bst_dictionary::Dictionary;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

fn shuffled_keys(size: u32) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..size).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(1));
    keys
}

fn insertion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100u32, 1_000] {
        let random = shuffled_keys(size);
        let sorted: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("dictionary_random", size), &random, |b, keys| {
            b.iter(|| {
                let mut dict = Dictionary::new(true);
                for key in keys {
                    dict.insert(*key, *key).unwrap();
                }
                black_box(dict.len())
            })
        });

        // Sorted input is the unbalanced worst case.
        group.bench_with_input(BenchmarkId::new("dictionary_sorted", size), &sorted, |b, keys| {
            b.iter(|| {
                let mut dict = Dictionary::new(true);
                for key in keys {
                    dict.insert(*key, *key).unwrap();
                }
                black_box(dict.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreemap", size), &random, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for key in keys {
                    map.insert(*key, *key);
                }
                black_box(map.len())
            })
        });
    }

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let keys = shuffled_keys(10_000);

    let mut dict = Dictionary::new(true);
    let mut map = BTreeMap::new();
    for key in &keys {
        dict.insert(*key, *key).unwrap();
        map.insert(*key, *key);
    }

    group.bench_function("dictionary_get", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(10) {
                black_box(dict.get(key));
            }
        })
    });

    group.bench_function("std_btreemap_get", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(10) {
                black_box(map.get(key));
            }
        })
    });

    group.finish();
}

fn dump_benchmark(c: &mut Criterion) {
    let dict: Dictionary<u32, u32> = shuffled_keys(10_000).into_iter().map(|k| (k, k)).collect();

    c.bench_function("dump_10k", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(128 * 1024);
            dict.dump(&mut out).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, insertion_benchmark, lookup_benchmark, dump_benchmark);
criterion_main!(benches);
