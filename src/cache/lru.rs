//! Recency Cache Module
//!
//! Fixed-capacity key/value store with least-recently-used eviction.
//!
//! Entries live in a dense slab (`Vec`) threaded by an index-linked
//! doubly-linked list:
//! - Head = Most recently used
//! - Tail = Least recently used
//!
//! A `HashMap` maps keys to slab slots, so lookup, promotion, insertion,
//! eviction and removal are all O(1).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::CacheError;

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

// == Recency Cache ==
/// Bounded LRU map.
///
/// `get` and `set` promote the touched key to most-recently-used; `has`
/// and `peek` observe without disturbing the order.
#[derive(Debug)]
pub struct RecencyCache<K, V> {
    map: HashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
    capacity: usize,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            capacity,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.promote(idx);
        Some(&self.nodes[idx].value)
    }

    /// Returns the value for `key` without touching recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    /// Membership probe with no recency side effect.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    // == Set ==
    /// Inserts or overwrites `key`, making it most recently used.
    ///
    /// Overwriting keeps occupancy unchanged. Inserting a new key into a
    /// full cache evicts the coldest entry first and returns it.
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.promote(idx);
            return None;
        }

        if self.nodes.len() >= self.capacity {
            // Reuse the coldest slot in place.
            let idx = self.tail;
            self.detach(idx);
            let node = &mut self.nodes[idx];
            let old_key = std::mem::replace(&mut node.key, key.clone());
            let old_value = std::mem::replace(&mut node.value, value);
            self.map.remove(&old_key);
            self.map.insert(key, idx);
            self.attach_front(idx);
            return Some((old_key, old_value));
        }

        let idx = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.map.insert(key, idx);
        self.attach_front(idx);
        None
    }

    // == Remove ==
    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.detach(idx);

        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(idx);

        if idx != last {
            // The former last node now sits at `idx`; repoint its neighbours.
            let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
            if prev != NIL {
                self.nodes[prev].next = idx;
            } else {
                self.head = idx;
            }
            if next != NIL {
                self.nodes[next].prev = idx;
            } else {
                self.tail = idx;
            }
            if let Some(slot) = self.map.get_mut::<K>(&self.nodes[idx].key) {
                *slot = idx;
            }
        }

        Some(node.value)
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Inspection ==
    /// Least recently used key, the next eviction candidate.
    pub fn peek_coldest(&self) -> Option<&K> {
        (self.tail != NIL).then(|| &self.nodes[self.tail].key)
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    // == Occupancy ==
    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum number of entries before eviction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == List Plumbing ==
    fn promote(&mut self, idx: usize) {
        if self.head != idx {
            self.detach(idx);
            self.attach_front(idx);
        }
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = old_head;

        if old_head != NIL {
            self.nodes[old_head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }
}

/// Hot-to-cold iterator over a [`RecencyCache`].
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    cursor: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
