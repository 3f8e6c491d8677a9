//! Bounded top-k selection
//!
//! Keeps the `k` best scored keys seen so far without sorting the whole
//! candidate set. The heap is ordered so that its top is always the current
//! worst entry, which is the one evicted when an insert overflows capacity.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which end of the score range counts as "best"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Retain {
    /// Keep the k lowest scores, evict the highest
    Lowest,
    /// Keep the k highest scores, evict the lowest
    Highest,
}

/// A key with its score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scored<K> {
    pub key: K,
    pub score: f64,
}

/// Heap entry. `Ord` puts worse entries above better ones.
#[derive(Debug, Clone)]
struct Entry<K> {
    retain: Retain,
    scored: Scored<K>,
}

impl<K: Ord> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Entry<K> {}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_score = match self.retain {
            Retain::Lowest => self.scored.score.total_cmp(&other.scored.score),
            Retain::Highest => other.scored.score.total_cmp(&self.scored.score),
        };
        // Equal scores: the smaller key is worse and goes first
        by_score.then_with(|| other.scored.key.cmp(&self.scored.key))
    }
}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-capacity best-k collection
#[derive(Debug, Clone)]
pub struct BoundedTopK<K> {
    capacity: usize,
    retain: Retain,
    heap: BinaryHeap<Entry<K>>,
}

impl<K: Ord> BoundedTopK<K> {
    /// `capacity` bounds how many entries are kept, not how many are
    /// allocated up front.
    pub fn new(capacity: usize, retain: Retain) -> Self {
        Self {
            capacity,
            retain,
            heap: BinaryHeap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn retain(&self) -> Retain {
        self.retain
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert, then drop the worst entry if over capacity
    pub fn push(&mut self, key: K, score: f64) {
        self.heap.push(Entry {
            retain: self.retain,
            scored: Scored { key, score },
        });
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// The entry that would be evicted next
    pub fn worst(&self) -> Option<&Scored<K>> {
        self.heap.peek().map(|entry| &entry.scored)
    }

    /// Fold another selection with the same policy into this one
    pub fn merge(mut self, other: Self) -> Self {
        for entry in other.heap {
            self.push(entry.scored.key, entry.scored.score);
        }
        self
    }

    /// Retained entries, best first
    pub fn into_sorted_vec(self) -> Vec<Scored<K>> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.scored)
            .collect()
    }
}
