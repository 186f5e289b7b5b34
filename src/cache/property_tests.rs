//! Property-Based Tests for Cache Module
//!
//! Checks the recency cache against a simple ordered-vector model, plus
//! the freshness rule layered on top of it.

use proptest::prelude::*;

use crate::alerts::{AlertQueue, Prioritized};
use crate::cache::{Freshness, RecencyCache, Timestamped};

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..8
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: u8, value: u32 },
    Get { key: u8 },
    Peek { key: u8 },
    Has { key: u8 },
    Remove { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Peek { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

// == Model ==
/// Entries ordered most recently used first.
struct Model {
    capacity: usize,
    entries: Vec<(u8, u32)>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let i = self.position(key)?;
        let entry = self.entries.remove(i);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn set(&mut self, key: u8, value: u32) -> Option<(u8, u32)> {
        if let Some(i) = self.position(key) {
            self.entries.remove(i);
            self.entries.insert(0, (key, value));
            return None;
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn remove(&mut self, key: u8) -> Option<u32> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    priority: u8,
    id: usize,
}

impl Prioritized for Item {
    fn priority(&self) -> u8 {
        self.priority
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every operation agrees with the model, including recency order.
    #[test]
    fn prop_matches_recency_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80),
    ) {
        let mut cache = RecencyCache::new(capacity).unwrap();
        let mut model = Model { capacity, entries: Vec::new() };

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    prop_assert_eq!(cache.set(key, value), model.set(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
                CacheOp::Peek { key } => {
                    let expected = model.position(key).map(|i| model.entries[i].1);
                    prop_assert_eq!(cache.peek(&key).copied(), expected);
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key), model.position(key).is_some());
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(key));
                }
            }

            let order: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&order, &model.entries);
            prop_assert_eq!(cache.peek_coldest().copied(), model.entries.last().map(|(k, _)| *k));
        }
    }

    // Size never exceeds capacity, whatever is inserted.
    #[test]
    fn prop_capacity_bound(
        capacity in 1usize..10,
        keys in prop::collection::vec(any::<u16>(), 0..200),
    ) {
        let mut cache = RecencyCache::new(capacity).unwrap();
        for key in keys {
            cache.set(key, ());
            prop_assert!(cache.len() <= capacity);
        }
    }

    // Filling a full cache with fresh keys evicts exactly the previous
    // contents, coldest first.
    #[test]
    fn prop_eviction_is_coldest_first(capacity in 1usize..8) {
        let mut cache = RecencyCache::new(capacity).unwrap();
        for k in 0..capacity {
            cache.set(k, k);
        }
        for k in 0..capacity {
            let evicted = cache.set(capacity + k, 0).map(|(key, _)| key);
            prop_assert_eq!(evicted, Some(k));
        }
    }

    // A value is fresh exactly while its age is below the window.
    #[test]
    fn prop_freshness_boundary(
        stored_at in 0u64..1_000_000_000,
        window in 1u64..10_000_000,
        age in 0u64..20_000_000,
    ) {
        let entry = Timestamped::new((), stored_at);
        let now = stored_at + age;
        prop_assert_eq!(entry.is_fresh(now, Freshness::Within(window)), age < window);
        prop_assert!(entry.is_fresh(now, Freshness::Forever));
    }

    // Drained alerts are ordered by priority and FIFO among equals.
    #[test]
    fn prop_alert_queue_stable_order(priorities in prop::collection::vec(0u8..4, 0..40)) {
        let mut queue = AlertQueue::new();
        for (id, priority) in priorities.iter().enumerate() {
            queue.push(Item { priority: *priority, id });
        }

        let drained: Vec<(u8, usize)> = queue
            .drain_sorted()
            .into_iter()
            .map(|item| (item.priority, item.id))
            .collect();

        let mut expected: Vec<(u8, usize)> = priorities
            .iter()
            .enumerate()
            .map(|(id, p)| (*p, id))
            .collect();
        expected.sort();

        prop_assert_eq!(drained, expected);
    }
}
