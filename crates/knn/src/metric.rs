//! Distance abstractions and the Euclidean metric.

use std::fmt;

use pagejoin_spatial::Mbr;

use crate::error::MetricError;

/// Totally ordered distance scalar with an infinite sentinel.
///
/// Only comparison and max are assumed; values need not be real numbers.
/// `PartialOrd` must behave as a total order on the values a metric
/// actually produces (incomparable pairs are treated as equal by the join).
pub trait DistanceValue: Clone + PartialOrd + fmt::Debug {
    /// Sentinel strictly greater than every achievable finite distance.
    fn infinite() -> Self;

    /// The larger of two values.
    fn max(self, other: Self) -> Self;
}

impl DistanceValue for f64 {
    fn infinite() -> Self {
        f64::INFINITY
    }

    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }
}

impl DistanceValue for u64 {
    fn infinite() -> Self {
        u64::MAX
    }

    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}

/// Pairwise distance over stored objects, addressed by id, plus a
/// metric-consistent lower bound over bounding regions.
///
/// The lower bound must never overestimate the minimum possible distance
/// between the regions' contents; this is the correctness precondition
/// for page-level pruning. The infinite sentinel is supplied by
/// [`DistanceValue::infinite`].
pub trait DistanceMetric<I> {
    /// Distance scalar produced by this metric.
    type Value: DistanceValue;

    /// Dimensionality of the object space, checked once against the view
    /// at join start.
    fn dimensionality(&self) -> usize;

    /// True distance between two stored objects.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError`] if a distance cannot be computed; the join
    /// aborts on the first failure.
    fn exact(&self, a: I, b: I) -> Result<Self::Value, MetricError>;

    /// Lower bound on the distance between any object in `a` and any
    /// object in `b`. Zero when the regions overlap.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError`] if the bound cannot be computed.
    fn lower_bound(&self, a: &Mbr, b: &Mbr) -> Result<Self::Value, MetricError>;
}

/// Euclidean metric over a flat row-major point table.
///
/// Objects are addressed by dense row index; the region lower bound is
/// MINDIST ([`Mbr::min_dist`]).
#[derive(Debug, Clone)]
pub struct EuclideanMetric<'a> {
    points: &'a [f64],
    dims: usize,
}

impl<'a> EuclideanMetric<'a> {
    /// Creates a metric over `points` with `dims` coordinates per row.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError`] if `dims` is zero or the table length is not
    /// divisible by `dims`.
    pub fn new(points: &'a [f64], dims: usize) -> Result<Self, MetricError> {
        if dims == 0 {
            return Err(MetricError::new("dimensionality must be >= 1"));
        }
        if !points.len().is_multiple_of(dims) {
            return Err(MetricError::new(format!(
                "point table length {} is not divisible by dimensionality {dims}",
                points.len()
            )));
        }
        Ok(Self { points, dims })
    }

    fn row(&self, id: usize) -> Result<&'a [f64], MetricError> {
        let start = id * self.dims;
        let end = start + self.dims;
        if end > self.points.len() {
            return Err(MetricError::new(format!("object id {id} out of range")));
        }
        Ok(&self.points[start..end])
    }
}

impl DistanceMetric<usize> for EuclideanMetric<'_> {
    type Value = f64;

    fn dimensionality(&self) -> usize {
        self.dims
    }

    fn exact(&self, a: usize, b: usize) -> Result<f64, MetricError> {
        let ra = self.row(a)?;
        let rb = self.row(b)?;
        let mut acc = 0.0;
        for (x, y) in ra.iter().zip(rb) {
            let d = x - y;
            acc += d * d;
        }
        Ok(acc.sqrt())
    }

    fn lower_bound(&self, a: &Mbr, b: &Mbr) -> Result<f64, MetricError> {
        Ok(a.min_dist(b))
    }
}
