use memocache::fib::{fib, Fibonacci};
use memocache::{Cache, Error, LRUCache, UnboundedCache};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_log::test;

/// Straightforward LRU: a vector ordered from least to most recently used.
struct ModelLru {
    capacity: usize,
    entries: Vec<(u8, u32)>,
}

impl ModelLru {
    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.entries.iter().position(|&(k, _)| k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.push(entry);
        Some(entry.1)
    }

    fn set(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.entries.iter().position(|&(k, _)| k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push((key, value));
    }
}

#[test]
fn lru_matches_reference_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for capacity in [1u64, 2, 3, 7, 16] {
        let cache = LRUCache::new(capacity).unwrap();
        let mut model = ModelLru {
            capacity: capacity as usize,
            entries: Vec::new(),
        };
        for _ in 0..2000 {
            let key: u8 = rng.random_range(0..24);
            if rng.random_bool(0.5) {
                assert_eq!(cache.get(&key).map(|v| *v), model.get(key));
            } else {
                let value: u32 = rng.random();
                cache.set(key, value);
                model.set(key, value);
            }
            assert!(cache.stats().size <= capacity);
            let model_keys: Vec<u8> = model.entries.iter().map(|&(k, _)| k).collect();
            assert_eq!(cache.keys(), model_keys);
        }
    }
}

#[test]
fn eviction_removes_exactly_the_first_key() {
    for capacity in 1..=6u64 {
        let cache = LRUCache::new(capacity).unwrap();
        for k in 1..=capacity + 1 {
            cache.get_or_compute(k, |&k| Ok::<_, ()>(k)).unwrap();
        }
        assert_eq!(cache.stats().misses, capacity + 1);

        cache.get_or_compute(1, |&k| Ok::<_, ()>(k)).unwrap();
        assert_eq!(cache.stats().misses, capacity + 2);

        // Re-inserting k1 pushed out k2; everything after it is still held.
        for k in 3..=capacity + 1 {
            let before = cache.stats().hits;
            cache.get_or_compute(k, |&k| Ok::<_, ()>(k)).unwrap();
            assert_eq!(cache.stats().hits, before + 1, "k{} should hit", k);
        }
    }
}

#[test]
fn eviction_then_remaining_keys_hit() {
    let capacity = 4;
    let cache = LRUCache::new(capacity).unwrap();
    for k in 1..=capacity + 1 {
        cache.set(k, k);
    }
    assert!(!cache.contains(&1));
    for k in 2..=capacity + 1 {
        assert!(cache.get(&k).is_some());
    }
    assert_eq!(cache.stats().hits, capacity);
    assert!(cache.get(&1).is_none());
}

#[test]
fn recency_refresh_keeps_k1() {
    let cache = LRUCache::new(2).unwrap();
    let mut computed = Vec::new();
    for k in ["k1", "k2", "k1", "k3"] {
        cache
            .get_or_compute(k, |&k| {
                computed.push(k);
                Ok::<_, ()>(k.len())
            })
            .unwrap();
    }
    assert_eq!(computed, vec!["k1", "k2", "k3"]);
    assert!(cache.contains(&"k1"));
    assert!(!cache.contains(&"k2"));
    assert!(cache.contains(&"k3"));
}

#[test]
fn clear_makes_every_key_miss_again() {
    let caches: Vec<Box<dyn Cache<u32, u32>>> = vec![
        Box::new(UnboundedCache::<u32, u32>::new()),
        Box::new(LRUCache::new(8).unwrap()),
    ];
    for cache in caches {
        cache.clear();
        assert_eq!(cache.stats().size, 0);
        for k in 0..8 {
            cache.set(k, k);
        }
        cache.clear();
        for k in 0..8 {
            assert!(cache.get(&k).is_none());
        }
        assert_eq!(cache.stats().misses, 8);
    }
}

#[test]
fn invalid_capacity_is_rejected() {
    assert!(matches!(
        LRUCache::<u64, u64>::new(0),
        Err(Error::InvalidConfiguration { capacity: 0 })
    ));
}

#[test]
fn all_variants_agree() {
    for n in 0..=25 {
        let expected = fib(n).unwrap();
        assert_eq!(Fibonacci::unbounded().compute(n), Ok(expected));
        for capacity in [1, 2, 3, 5, 64] {
            assert_eq!(
                Fibonacci::lru(capacity).unwrap().compute(n),
                Ok(expected),
                "n = {}, capacity = {}",
                n,
                capacity
            );
        }
    }
}

#[test]
fn cached_variants_agree_up_to_the_overflow_boundary() {
    let unbounded = Fibonacci::unbounded();
    let lru = Fibonacci::lru(5).unwrap();
    for n in 0..=100 {
        assert_eq!(unbounded.compute(n), lru.compute(n), "n = {}", n);
    }
}

#[test]
fn literal_scenarios() {
    for (n, expected) in [(0, 0), (1, 1), (2, 1), (6, 8), (10, 55)] {
        assert_eq!(fib(n), Ok(expected));
        assert_eq!(Fibonacci::unbounded().compute(n), Ok(expected));
        assert_eq!(Fibonacci::lru(5).unwrap().compute(n), Ok(expected));
    }
}
