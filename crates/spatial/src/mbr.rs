//! Minimum bounding rectangles and their lower-bound distance.

use crate::error::IndexError;

/// Axis-aligned minimum bounding rectangle of fixed dimensionality.
///
/// Invariant: `min[i] <= max[i]` on every axis and all coordinates are
/// finite, enforced at construction. Regions are immutable; page-covering
/// regions are built with [`Mbr::union`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mbr {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl Mbr {
    /// Creates a region from its lower and upper corner.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the corners are empty, disagree in length,
    /// contain non-finite coordinates, or violate `min[i] <= max[i]`.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Result<Self, IndexError> {
        if min.is_empty() {
            return Err(IndexError::ZeroDimensions);
        }
        if min.len() != max.len() {
            return Err(IndexError::DimensionMismatch {
                min: min.len(),
                max: max.len(),
            });
        }
        for (axis, (lo, hi)) in min.iter().zip(&max).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(IndexError::NonFinite { index: axis });
            }
            if lo > hi {
                return Err(IndexError::MinExceedsMax {
                    axis,
                    min: *lo,
                    max: *hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Degenerate region covering a single point.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `coords` is empty or non-finite.
    pub fn point(coords: &[f64]) -> Result<Self, IndexError> {
        Self::new(coords.to_vec(), coords.to_vec())
    }

    /// Number of axes.
    pub fn dimensionality(&self) -> usize {
        self.min.len()
    }

    /// Lower corner.
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Upper corner.
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Covering union of two regions of equal dimensionality.
    pub fn union(&self, other: &Mbr) -> Mbr {
        debug_assert_eq!(self.min.len(), other.min.len());
        let min = self
            .min
            .iter()
            .zip(&other.min)
            .map(|(a, b)| a.min(*b))
            .collect();
        let max = self
            .max
            .iter()
            .zip(&other.max)
            .map(|(a, b)| a.max(*b))
            .collect();
        // Componentwise min/max of valid regions cannot violate the invariant.
        Mbr { min, max }
    }

    /// MINDIST: Euclidean lower bound on the distance between any point in
    /// `self` and any point in `other`.
    ///
    /// Exactly 0.0 when the regions overlap; never overestimates the true
    /// minimum pairwise distance.
    pub fn min_dist(&self, other: &Mbr) -> f64 {
        self.min_dist_sq(other).sqrt()
    }

    /// Squared form of [`Mbr::min_dist`].
    pub fn min_dist_sq(&self, other: &Mbr) -> f64 {
        debug_assert_eq!(self.min.len(), other.min.len());
        let mut acc = 0.0;
        for axis in 0..self.min.len() {
            let gap = if other.min[axis] > self.max[axis] {
                other.min[axis] - self.max[axis]
            } else if self.min[axis] > other.max[axis] {
                self.min[axis] - other.max[axis]
            } else {
                0.0
            };
            acc += gap * gap;
        }
        acc
    }
}
