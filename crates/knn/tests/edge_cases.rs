//! Edge case integration tests.

use approx::assert_abs_diff_eq;

use pagejoin_knn::{DistanceMetric, EuclideanMetric, JoinConfig, MetricError, knn_join};
use pagejoin_spatial::{FixedPageView, Mbr};

/// The documented concrete scenario: 1-D points 0, 1, 5, 6 with k = 1 and
/// self-matches excluded pair up as (0,1) and (5,6) at distance 1.
#[test]
fn four_points_on_a_line() {
    let points = vec![0.0, 1.0, 5.0, 6.0];
    let view = FixedPageView::new(points.clone(), 1, 2).unwrap();
    let metric = EuclideanMetric::new(&points, 1).unwrap();
    let config = JoinConfig::new(1).with_include_self(false);
    let result = knn_join(&view, &metric, &config).unwrap();

    for (id, expected) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
        let neighbors = result.neighbors(id).unwrap();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].id, expected);
        assert_abs_diff_eq!(neighbors[0].distance, 1.0, epsilon = 1e-12);
    }
}

/// Same scenario with self-matches admitted: every object is its own
/// nearest neighbor at distance zero.
#[test]
fn four_points_on_a_line_including_self() {
    let points = vec![0.0, 1.0, 5.0, 6.0];
    let view = FixedPageView::new(points.clone(), 1, 2).unwrap();
    let metric = EuclideanMetric::new(&points, 1).unwrap();
    let result = knn_join(&view, &metric, &JoinConfig::new(1)).unwrap();

    for id in 0..4 {
        let neighbors = result.neighbors(id).unwrap();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].id, id);
        assert_abs_diff_eq!(neighbors[0].distance, 0.0, epsilon = 1e-12);
    }
}

/// k larger than the collection: lists clamp to n (or n - 1 without self).
#[test]
fn k_exceeds_collection() {
    let points = vec![1.0, 2.0, 3.0];
    let view = FixedPageView::new(points.clone(), 1, 2).unwrap();
    let metric = EuclideanMetric::new(&points, 1).unwrap();

    let with_self = knn_join(&view, &metric, &JoinConfig::new(10)).unwrap();
    assert_eq!(with_self.neighbors(0).unwrap().len(), 3);

    let config = JoinConfig::new(10).with_include_self(false);
    let without_self = knn_join(&view, &metric, &config).unwrap();
    assert_eq!(without_self.neighbors(0).unwrap().len(), 2);
}

/// A single stored point.
#[test]
fn single_point() {
    let points = vec![4.0, 4.0];
    let view = FixedPageView::new(points.clone(), 2, 8).unwrap();
    let metric = EuclideanMetric::new(&points, 2).unwrap();

    let with_self = knn_join(&view, &metric, &JoinConfig::new(1)).unwrap();
    assert_eq!(with_self.neighbors(0).unwrap()[0].id, 0);

    let config = JoinConfig::new(1).with_include_self(false);
    let without_self = knn_join(&view, &metric, &config).unwrap();
    assert!(without_self.neighbors(0).unwrap().is_empty());
}

/// Everything in one page: the scan degenerates to one candidate page.
#[test]
fn single_page_collection() {
    let points: Vec<f64> = (0..20).map(f64::from).collect();
    let view = FixedPageView::new(points.clone(), 1, 64).unwrap();
    let metric = EuclideanMetric::new(&points, 1).unwrap();
    let config = JoinConfig::new(2).with_include_self(false);
    let result = knn_join(&view, &metric, &config).unwrap();

    assert_eq!(result.len(), 20);
    let ids: Vec<usize> = result.neighbors(0).unwrap().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

/// Identical coordinates: all distances zero, ids tie-permuted.
#[test]
fn duplicate_points() {
    let points = vec![5.0; 8];
    let view = FixedPageView::new(points.clone(), 1, 3).unwrap();
    let metric = EuclideanMetric::new(&points, 1).unwrap();
    let config = JoinConfig::new(3).with_include_self(false);
    let result = knn_join(&view, &metric, &config).unwrap();

    for id in 0..8 {
        let neighbors = result.neighbors(id).unwrap();
        assert_eq!(neighbors.len(), 3);
        for nb in neighbors {
            assert_abs_diff_eq!(nb.distance, 0.0, epsilon = 1e-12);
            assert_ne!(nb.id, id);
        }
    }
}

/// Manhattan metric on an integer grid, distance type u64: exercises a
/// non-real distance scalar end to end.
struct GridMetric {
    coords: Vec<[i64; 2]>,
}

impl DistanceMetric<usize> for GridMetric {
    type Value = u64;

    fn dimensionality(&self) -> usize {
        2
    }

    fn exact(&self, a: usize, b: usize) -> Result<u64, MetricError> {
        let pa = self.coords[a];
        let pb = self.coords[b];
        Ok(pa[0].abs_diff(pb[0]) + pa[1].abs_diff(pb[1]))
    }

    fn lower_bound(&self, a: &Mbr, b: &Mbr) -> Result<u64, MetricError> {
        let mut acc = 0.0;
        for axis in 0..2 {
            let gap = (b.min()[axis] - a.max()[axis])
                .max(a.min()[axis] - b.max()[axis])
                .max(0.0);
            acc += gap;
        }
        Ok(acc as u64)
    }
}

#[test]
fn integer_distance_values() {
    let coords = vec![[0_i64, 0], [1, 0], [10, 10], [11, 10]];
    let points: Vec<f64> = coords
        .iter()
        .flat_map(|c| [c[0] as f64, c[1] as f64])
        .collect();
    let view = FixedPageView::new(points, 2, 2).unwrap();
    let metric = GridMetric { coords };
    let config = JoinConfig::new(1).with_include_self(false);
    let result = knn_join(&view, &metric, &config).unwrap();

    for (id, expected) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
        let nn = &result.neighbors(id).unwrap()[0];
        assert_eq!(nn.id, expected);
        assert_eq!(nn.distance, 1);
    }
}
