//! Pruning soundness: the page-level prune must never change results.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pagejoin_knn::{EuclideanMetric, JoinConfig, JoinResult, knn_join};
use pagejoin_spatial::FixedPageView;

fn assert_identical(a: &JoinResult<usize, f64>, b: &JoinResult<usize, f64>, n: usize) {
    assert_eq!(a.len(), n);
    assert_eq!(b.len(), n);
    for id in 0..n {
        let pruned = a.neighbors(id).unwrap();
        let unpruned = b.neighbors(id).unwrap();
        let da: Vec<f64> = pruned.iter().map(|nb| nb.distance).collect();
        let db: Vec<f64> = unpruned.iter().map(|nb| nb.distance).collect();
        assert_eq!(da, db, "pruning changed distances for object {id}");
    }
}

#[test]
fn pruning_is_transparent_on_random_data() {
    let mut rng = StdRng::seed_from_u64(17);
    let points: Vec<f64> = (0..300).map(|_| rng.random_range(-50.0..50.0)).collect();
    let view = FixedPageView::new(points.clone(), 2, 8).unwrap();
    let metric = EuclideanMetric::new(&points, 2).unwrap();

    let on = knn_join(&view, &metric, &JoinConfig::new(5)).unwrap();
    let off = knn_join(&view, &metric, &JoinConfig::new(5).with_pruning(false)).unwrap();
    assert_identical(&on, &off, 150);
}

#[test]
fn pruning_is_transparent_on_clustered_data() {
    // Two far-apart clusters: cross-cluster candidate pages are certain to
    // be pruned once in-cluster neighbors fill the lists.
    let mut rng = StdRng::seed_from_u64(23);
    let mut points = Vec::new();
    for _ in 0..60 {
        points.push(rng.random_range(0.0..1.0));
        points.push(rng.random_range(0.0..1.0));
    }
    for _ in 0..60 {
        points.push(rng.random_range(1000.0..1001.0));
        points.push(rng.random_range(1000.0..1001.0));
    }
    let view = FixedPageView::new(points.clone(), 2, 6).unwrap();
    let metric = EuclideanMetric::new(&points, 2).unwrap();
    let config = JoinConfig::new(3).with_include_self(false);

    let on = knn_join(&view, &metric, &config).unwrap();
    let off = knn_join(&view, &metric, &config.clone().with_pruning(false)).unwrap();
    assert_identical(&on, &off, 120);

    // Sanity: neighbors stay within the object's own cluster.
    for id in 0..60 {
        for nb in on.neighbors(id).unwrap() {
            assert!(nb.id < 60, "object {id} matched across clusters");
        }
    }
    for id in 60..120 {
        for nb in on.neighbors(id).unwrap() {
            assert!(nb.id >= 60, "object {id} matched across clusters");
        }
    }
}
