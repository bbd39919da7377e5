//! Page-organized spatial index data model.
//!
//! This crate defines the read-only contract consumed by page-at-a-time
//! spatial algorithms: bounding regions ([`Mbr`]), leaf pages and their
//! directory ([`PageRef`], [`IndexPage`]), and the [`SpatialIndexView`]
//! trait. It does not build or balance index trees; views expose an
//! already-organized collection.
//!
//! [`FixedPageView`] is the bundled in-memory view: a flat point table
//! chunked into fixed-capacity pages with precomputed covering regions.
//!
//! # Quick start
//!
//! ```
//! use pagejoin_spatial::{FixedPageView, SpatialIndexView};
//!
//! // Four 1-D points, two per page.
//! let view = FixedPageView::new(vec![0.0, 1.0, 5.0, 6.0], 1, 2).unwrap();
//!
//! let pages = view.leaf_pages();
//! assert_eq!(pages.len(), 2);
//!
//! // Directory references carry covering regions for prune checks;
//! // resolving a page loads its entries.
//! assert_eq!(pages[0].mbr.min(), &[0.0]);
//! assert_eq!(pages[0].mbr.max(), &[1.0]);
//! let page = view.resolve(&pages[1]).unwrap();
//! assert_eq!(page.entries[0].id, 2);
//! ```

pub mod error;
pub mod mbr;
pub mod page;
pub mod view;

pub use error::IndexError;
pub use mbr::Mbr;
pub use page::{IndexEntry, IndexPage, ObjectId, PageRef};
pub use view::{FixedPageView, SpatialIndexView};
