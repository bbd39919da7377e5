//! Bulk self k-nearest-neighbor join over page-organized spatial data.
//!
//! Computes, for every object in a collection exposed through a
//! [`SpatialIndexView`](pagejoin_spatial::SpatialIndexView), its k nearest
//! neighbors within that same collection. The join works page-at-a-time:
//! candidate pages whose covering-region lower bound exceeds the query
//! page's admission bound are skipped without being loaded.
//!
//! # Quick start
//!
//! ```
//! use pagejoin_knn::{EuclideanMetric, JoinConfig, knn_join};
//! use pagejoin_spatial::FixedPageView;
//!
//! let points = vec![0.0, 1.0, 5.0, 6.0];
//! let view = FixedPageView::new(points.clone(), 1, 2).unwrap();
//! let metric = EuclideanMetric::new(&points, 1).unwrap();
//! let config = JoinConfig::new(1).with_include_self(false);
//!
//! let result = knn_join(&view, &metric, &config).unwrap();
//! for (id, expected) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
//!     let nn = &result.neighbors(id).unwrap()[0];
//!     assert_eq!((nn.id, nn.distance), (expected, 1.0));
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! knn_join()
//!   ├─ validate config, dimensionality, non-emptiness
//!   ├─ materialize the leaf-page directory      (candidate set)
//!   └─ per query page, alternating scan direction:
//!        ├─ NeighborList arena                  (neighbors.rs)
//!        ├─ lower_bound() prune check           (metric.rs)
//!        ├─ exact() over admitted page pairs    (metric.rs)
//!        └─ finalize into JoinResult            (result.rs)
//! ```
//!
//! Distance values are any [`DistanceValue`] (compared and maxed, never
//! added), so metrics are free to use non-real scalars. Within equal
//! distances, which neighbor id is retained is unspecified; everything
//! else is deterministic for a frozen view, metric, and k.

pub mod config;
pub mod error;
pub mod join;
pub mod metric;
pub mod neighbors;
pub mod observer;
pub mod result;

pub use config::JoinConfig;
pub use error::{JoinError, MetricError};
pub use join::{knn_join, knn_join_with_observer};
pub use metric::{DistanceMetric, DistanceValue, EuclideanMetric};
pub use neighbors::{Neighbor, NeighborList};
pub use observer::{JoinObserver, NoopObserver};
pub use result::JoinResult;
