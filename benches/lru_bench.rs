use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memocache::{Cache, LRUCache, UnboundedCache};

fn bench_caches(c: &mut Criterion) {
    // A list of (label, factory) pairs, where 'factory' creates a fresh cache each time.
    let cache_factories: Vec<(&'static str, Box<dyn Fn() -> Box<dyn Cache<i32, i32>>>)> = vec![
        ("LRU", Box::new(|| Box::new(LRUCache::new(100).unwrap()))),
        ("UNBOUNDED", Box::new(|| Box::new(UnboundedCache::new()))),
    ];

    for (label, factory) in cache_factories {
        c.bench_function(&format!("{}_set_1k", label), |b| {
            b.iter(|| {
                let cache = factory();
                for i in 0..1000 {
                    cache.set(i, black_box(i + 1));
                }
            })
        });

        c.bench_function(&format!("{}_get_1k", label), |b| {
            // Pre-fill the cache before timing gets
            let cache = factory();
            for i in 0..1000 {
                cache.set(i, i + 1);
            }
            b.iter(|| {
                for i in 0..1000 {
                    black_box(cache.get(&i));
                }
            })
        });
    }

    c.bench_function("LRU_evict_1k", |b| {
        b.iter(|| {
            let cache = LRUCache::new(50).unwrap();
            for i in 0..1000 {
                cache.set(i, black_box(i));
            }
        })
    });
}

criterion_group!(benches, bench_caches);
criterion_main!(benches);
