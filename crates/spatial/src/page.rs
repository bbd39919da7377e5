//! Leaf pages, entries, and directory references.

use std::fmt;
use std::hash::Hash;

use crate::mbr::Mbr;

/// Opaque identifier of a stored object.
///
/// Blanket-implemented for any cheap, hashable, comparable type.
pub trait ObjectId: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> ObjectId for T {}

/// Directory reference to a leaf page: its position and covering region.
///
/// Carrying the covering region in the directory lets callers prune a page
/// without fetching it.
#[derive(Debug, Clone)]
pub struct PageRef {
    /// Position of the page in the view's leaf directory.
    pub page_no: usize,
    /// Covering region of every entry stored in the page.
    pub mbr: Mbr,
}

/// One stored object inside a leaf page.
#[derive(Debug, Clone)]
pub struct IndexEntry<I> {
    /// Identifier of the stored object.
    pub id: I,
    /// Bounding region of the object.
    pub mbr: Mbr,
}

/// A resolved leaf page: one entry per object it stores.
#[derive(Debug, Clone)]
pub struct IndexPage<I> {
    /// Position of the page in the view's leaf directory.
    pub page_no: usize,
    /// Entries in page order.
    pub entries: Vec<IndexEntry<I>>,
}

impl<I> IndexPage<I> {
    /// Number of objects stored in the page.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the page stores no objects.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
