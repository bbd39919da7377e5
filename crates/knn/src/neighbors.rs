//! Bounded per-object neighbor lists.

use std::cmp::Ordering;

use crate::metric::DistanceValue;

/// Compares two distance values, treating incomparable pairs as equal.
pub(crate) fn cmp_distance<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// One retained neighbor.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<I, V> {
    /// Identifier of the neighboring object.
    pub id: I,
    /// Distance to the query object.
    pub distance: V,
}

/// Fixed-capacity list of the k nearest neighbors seen so far, ascending
/// by distance.
///
/// Once full, the largest retained distance is the acceptance threshold:
/// offers at or above it are rejected without mutation. Among entries tied
/// at the maximum distance, which id survives is unspecified; the retained
/// distances themselves are deterministic for a fixed offer sequence.
#[derive(Debug, Clone)]
pub struct NeighborList<I, V> {
    k: usize,
    entries: Vec<Neighbor<I, V>>,
}

impl<I, V: DistanceValue> NeighborList<I, V> {
    /// Creates an empty list with capacity `k`.
    ///
    /// # Panics
    ///
    /// Debug-asserts `k >= 1`.
    pub fn new(k: usize) -> Self {
        debug_assert!(k >= 1, "neighbor list capacity must be >= 1");
        Self {
            k,
            entries: Vec::with_capacity(k + 1),
        }
    }

    /// Capacity of the list.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of retained neighbors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no neighbor has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained neighbors, ascending by distance.
    pub fn neighbors(&self) -> &[Neighbor<I, V>] {
        &self.entries
    }

    /// The live acceptance threshold: infinite while the list holds fewer
    /// than k entries, else the k-th smallest distance seen so far.
    pub fn threshold(&self) -> V {
        if self.entries.len() < self.k {
            V::infinite()
        } else {
            self.entries[self.k - 1].distance.clone()
        }
    }

    /// The current k-th nearest distance, if the list is full.
    pub fn knn_distance(&self) -> Option<&V> {
        (self.entries.len() == self.k).then(|| &self.entries[self.k - 1].distance)
    }

    /// Offers a candidate neighbor.
    ///
    /// Rejects without mutation when the list is full and `distance` is
    /// not strictly below the threshold. Returns `true` iff the contents
    /// changed. Callers must not offer the same id twice into one list.
    pub fn offer(&mut self, id: I, distance: V) -> bool {
        if self.entries.len() == self.k
            && cmp_distance(&distance, &self.threshold()) != Ordering::Less
        {
            return false;
        }
        let pos = self
            .entries
            .partition_point(|n| cmp_distance(&n.distance, &distance) != Ordering::Greater);
        self.entries.insert(pos, Neighbor { id, distance });
        self.entries.truncate(self.k);
        true
    }

    /// Consumes the list into its retained neighbors.
    pub fn into_neighbors(self) -> Vec<Neighbor<I, V>> {
        self.entries
    }
}
