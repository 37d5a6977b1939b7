//! Bounded insertion-ordered map with FIFO eviction

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Map that remembers insertion order and keeps at most `capacity` entries.
///
/// Inserting a new key appends it and, once over capacity, drops the oldest
/// entry. Inserting a key that is already present only updates its value;
/// its position in the order is unchanged.
///
/// Serves as the tabu window (recently visited solutions) and as the store
/// of improving solutions.
#[derive(Debug, Clone)]
pub struct FifoWindow<K, V> {
    capacity: usize,
    order: VecDeque<K>,
    entries: HashMap<K, V>,
}

impl<K, V> FifoWindow<K, V>
where
    K: Eq + Hash + Clone,
{
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "called `FifoWindow::new()` with zero capacity");
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity + 1),
            entries: HashMap::with_capacity(capacity + 1),
        }
    }

    /// Insert or update an entry, returning the evicted oldest entry if any.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return None;
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value);

        if self.order.len() > self.capacity {
            let oldest = self.order.pop_front()?;
            let value = self.entries.remove(&oldest)?;
            return Some((oldest, value));
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Consume the window, yielding entries from newest to oldest
    pub fn into_newest_first(mut self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.order.len());
        while let Some(key) = self.order.pop_back() {
            if let Some(value) = self.entries.remove(&key) {
                out.push((key, value));
            }
        }
        out
    }
}
