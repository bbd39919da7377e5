//! Output type for bulk self KNN joins.

use std::collections::HashMap;
use std::collections::hash_map;

use pagejoin_spatial::ObjectId;

use crate::metric::DistanceValue;
use crate::neighbors::{Neighbor, NeighborList};

/// Result of a bulk self KNN join: every stored object id mapped to its
/// finalized neighbor list.
///
/// With self-matches included each list holds `min(k, n)` neighbors for a
/// collection of `n` objects, otherwise `min(k, n - 1)`.
#[derive(Debug, Clone)]
pub struct JoinResult<I, V> {
    lists: HashMap<I, NeighborList<I, V>>,
}

impl<I: ObjectId, V: DistanceValue> JoinResult<I, V> {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            lists: HashMap::with_capacity(n),
        }
    }

    pub(crate) fn insert(&mut self, id: I, list: NeighborList<I, V>) {
        let previous = self.lists.insert(id, list);
        debug_assert!(previous.is_none(), "object id finalized twice: {id:?}");
    }

    /// The finalized neighbor list for `id`.
    pub fn list(&self, id: I) -> Option<&NeighborList<I, V>> {
        self.lists.get(&id)
    }

    /// The retained neighbors for `id`, ascending by distance.
    pub fn neighbors(&self, id: I) -> Option<&[Neighbor<I, V>]> {
        self.lists.get(&id).map(NeighborList::neighbors)
    }

    /// The k-nearest distance for `id`, if its list is full.
    pub fn knn_distance(&self, id: I) -> Option<&V> {
        self.lists.get(&id).and_then(NeighborList::knn_distance)
    }

    /// Whether `id` has a finalized list.
    pub fn contains(&self, id: I) -> bool {
        self.lists.contains_key(&id)
    }

    /// Number of objects in the result.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterates over `(id, list)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, I, NeighborList<I, V>> {
        self.lists.iter()
    }
}
