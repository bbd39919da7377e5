//! Error types for the pagejoin-knn crate.

use pagejoin_spatial::IndexError;

/// Distance computation failure.
///
/// Raised by [`DistanceMetric`](crate::metric::DistanceMetric)
/// implementations. The join surfaces it unretried and produces no partial
/// result.
#[derive(Debug, Clone, thiserror::Error)]
#[error("distance computation failed: {message}")]
pub struct MetricError {
    message: String,
}

impl MetricError {
    /// Creates a metric error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error type for all fallible operations in the pagejoin-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinError {
    /// Returned when the view holds no objects.
    #[error("collection must contain elements")]
    EmptyCollection,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the view and the metric disagree on dimensionality.
    /// Checked once, before any page work starts.
    #[error("index dimensionality {index} does not match metric dimensionality {metric}")]
    DimensionMismatch {
        /// Dimensionality reported by the view.
        index: usize,
        /// Dimensionality reported by the metric.
        metric: usize,
    },

    /// Returned when resolving a leaf page fails mid-join.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Returned when an exact or region distance fails mid-join.
    #[error(transparent)]
    Distance(#[from] MetricError),

    /// Returned when the observer requested cancellation between query
    /// pages.
    #[error("join cancelled after {processed} of {total} objects")]
    Cancelled {
        /// Objects whose pages had finalized when the join stopped.
        processed: usize,
        /// Total objects in the collection.
        total: usize,
    },
}
