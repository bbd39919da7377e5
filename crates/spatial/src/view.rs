//! Read-only views over prebuilt page-organized spatial data.

use crate::error::IndexError;
use crate::mbr::Mbr;
use crate::page::{IndexEntry, IndexPage, ObjectId, PageRef};

/// Read-only contract over a prebuilt spatial index.
///
/// The index is consumed, never built or rebalanced: callers see the leaf
/// directory and can resolve individual pages, nothing else. `leaf_pages`
/// must return a stable order across calls on a frozen view.
pub trait SpatialIndexView {
    /// Identifier type of stored objects.
    type Id: ObjectId;

    /// Coordinates per stored object.
    fn dimensionality(&self) -> usize;

    /// Total number of stored objects across all leaf pages.
    fn object_count(&self) -> usize;

    /// The leaf-page directory, in a stable implementation-defined order.
    fn leaf_pages(&self) -> Vec<PageRef>;

    /// Loads the entries of a leaf page.
    ///
    /// The only call that may touch storage. Failures are surfaced to the
    /// caller unretried; callers needing resilience wrap this method.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the page cannot be loaded.
    fn resolve(&self, page: &PageRef) -> Result<IndexPage<Self::Id>, IndexError>;
}

/// In-memory view over a flat row-major point table, paged by fixed
/// capacity in input order.
///
/// Object ids are dense row indices. This is a pager over already-stored
/// points; spatial locality of the pages is whatever the input order
/// provides, so callers wanting tight covering regions should presort.
///
/// # Example
///
/// ```
/// use pagejoin_spatial::{FixedPageView, SpatialIndexView};
///
/// let view = FixedPageView::new(vec![0.0, 1.0, 5.0, 6.0], 1, 2).unwrap();
/// assert_eq!(view.object_count(), 4);
/// assert_eq!(view.leaf_pages().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FixedPageView {
    points: Vec<f64>,
    dims: usize,
    capacity: usize,
    pages: Vec<PageRef>,
}

impl FixedPageView {
    /// Creates a view over `points` with `dims` coordinates per row and
    /// `capacity` objects per page.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `dims` or `capacity` is zero, the table
    /// length is not divisible by `dims`, or a coordinate is non-finite.
    pub fn new(points: Vec<f64>, dims: usize, capacity: usize) -> Result<Self, IndexError> {
        if dims == 0 {
            return Err(IndexError::ZeroDimensions);
        }
        if capacity == 0 {
            return Err(IndexError::InvalidPageCapacity);
        }
        if !points.len().is_multiple_of(dims) {
            return Err(IndexError::ShapeMismatch {
                len: points.len(),
                dims,
            });
        }
        if let Some(index) = points.iter().position(|v| !v.is_finite()) {
            return Err(IndexError::NonFinite { index });
        }

        let mut pages = Vec::new();
        for (page_no, chunk) in points.chunks(capacity * dims).enumerate() {
            let mut mbr = Mbr::point(&chunk[..dims])?;
            for row in chunk.chunks_exact(dims).skip(1) {
                mbr = mbr.union(&Mbr::point(row)?);
            }
            pages.push(PageRef { page_no, mbr });
        }

        Ok(Self {
            points,
            dims,
            capacity,
            pages,
        })
    }

    /// The underlying flat point table.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Objects per page (the last page may hold fewer).
    pub fn page_capacity(&self) -> usize {
        self.capacity
    }
}

impl SpatialIndexView for FixedPageView {
    type Id = usize;

    fn dimensionality(&self) -> usize {
        self.dims
    }

    fn object_count(&self) -> usize {
        self.points.len() / self.dims
    }

    fn leaf_pages(&self) -> Vec<PageRef> {
        self.pages.clone()
    }

    fn resolve(&self, page: &PageRef) -> Result<IndexPage<usize>, IndexError> {
        if page.page_no >= self.pages.len() {
            return Err(IndexError::PageOutOfRange {
                page_no: page.page_no,
                pages: self.pages.len(),
            });
        }
        let start = page.page_no * self.capacity;
        let end = (start + self.capacity).min(self.object_count());
        let mut entries = Vec::with_capacity(end - start);
        for id in start..end {
            let row = &self.points[id * self.dims..(id + 1) * self.dims];
            entries.push(IndexEntry {
                id,
                mbr: Mbr::point(row)?,
            });
        }
        Ok(IndexPage {
            page_no: page.page_no,
            entries,
        })
    }
}
