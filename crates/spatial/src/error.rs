//! Error types for the pagejoin-spatial crate.

/// Error type for all fallible operations in the pagejoin-spatial crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// Returned when a region or point table has zero dimensions.
    #[error("dimensionality must be >= 1")]
    ZeroDimensions,

    /// Returned when two coordinate vectors disagree in length.
    #[error("dimension mismatch: min has {min} coordinates, max has {max}")]
    DimensionMismatch {
        /// Length of the min coordinate vector.
        min: usize,
        /// Length of the max coordinate vector.
        max: usize,
    },

    /// Returned when a flat point table length is not divisible by the
    /// dimensionality.
    #[error("point table length {len} is not divisible by dimensionality {dims}")]
    ShapeMismatch {
        /// Length of the flat point table.
        len: usize,
        /// Coordinates per point.
        dims: usize,
    },

    /// Returned when a bounding region has min > max on some axis.
    #[error("invalid region: min {min} exceeds max {max} on axis {axis}")]
    MinExceedsMax {
        /// The violating axis.
        axis: usize,
        /// Lower bound on that axis.
        min: f64,
        /// Upper bound on that axis.
        max: f64,
    },

    /// Returned when a coordinate is NaN or infinite.
    #[error("non-finite coordinate at index {index}")]
    NonFinite {
        /// Position of the offending coordinate.
        index: usize,
    },

    /// Returned when a page capacity of zero is requested.
    #[error("page capacity must be >= 1")]
    InvalidPageCapacity,

    /// Returned when a page reference does not belong to the view.
    #[error("page {page_no} out of range: view has {pages} pages")]
    PageOutOfRange {
        /// The requested page number.
        page_no: usize,
        /// Number of pages in the view.
        pages: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_zero_dimensions() {
        let e = IndexError::ZeroDimensions;
        assert_eq!(e.to_string(), "dimensionality must be >= 1");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = IndexError::ShapeMismatch { len: 7, dims: 2 };
        assert_eq!(
            e.to_string(),
            "point table length 7 is not divisible by dimensionality 2"
        );
    }

    #[test]
    fn error_min_exceeds_max() {
        let e = IndexError::MinExceedsMax {
            axis: 1,
            min: 3.0,
            max: 2.0,
        };
        assert_eq!(e.to_string(), "invalid region: min 3 exceeds max 2 on axis 1");
    }

    #[test]
    fn error_page_out_of_range() {
        let e = IndexError::PageOutOfRange {
            page_no: 5,
            pages: 3,
        };
        assert_eq!(e.to_string(), "page 5 out of range: view has 3 pages");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IndexError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IndexError>();
    }
}
