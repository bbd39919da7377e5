//! The bulk self k-nearest-neighbor join.
//!
//! For every object stored in a page-organized spatial view, finds its k
//! nearest neighbors within the same collection. Pages, not objects, are
//! the unit of work: each query page gets a private arena of neighbor
//! lists, and candidate pages are admitted or pruned wholesale against the
//! page bound, the maximum of the per-object thresholds. A page may only
//! be skipped if it is provably useless for every object in the query
//! page. The candidate directory is scanned in alternating directions on
//! successive query pages (boustrophedon), so a bound tightened near the
//! end of one pass is exploited immediately at the start of the next.

use std::cmp::Ordering;

use tracing::debug;

use pagejoin_spatial::{IndexPage, ObjectId, SpatialIndexView};

use crate::config::JoinConfig;
use crate::error::JoinError;
use crate::metric::{DistanceMetric, DistanceValue};
use crate::neighbors::{NeighborList, cmp_distance};
use crate::observer::{JoinObserver, NoopObserver};
use crate::result::JoinResult;

/// Runs the bulk self KNN join.
///
/// # Example
///
/// ```
/// use pagejoin_knn::{EuclideanMetric, JoinConfig, knn_join};
/// use pagejoin_spatial::FixedPageView;
///
/// // Four 1-D points: 0, 1, 5, 6.
/// let points = vec![0.0, 1.0, 5.0, 6.0];
/// let view = FixedPageView::new(points.clone(), 1, 2).unwrap();
/// let metric = EuclideanMetric::new(&points, 1).unwrap();
/// let config = JoinConfig::new(1).with_include_self(false);
///
/// let result = knn_join(&view, &metric, &config).unwrap();
/// assert_eq!(result.neighbors(0).unwrap()[0].id, 1);
/// assert_eq!(result.neighbors(2).unwrap()[0].id, 3);
/// ```
///
/// # Errors
///
/// Returns [`JoinError`] if the configuration is invalid, the collection is
/// empty, the view and metric disagree on dimensionality, or a page
/// resolution / distance computation fails mid-join. The join never
/// retries and never returns a partial result.
pub fn knn_join<S, M>(
    view: &S,
    metric: &M,
    config: &JoinConfig,
) -> Result<JoinResult<S::Id, M::Value>, JoinError>
where
    S: SpatialIndexView,
    M: DistanceMetric<S::Id>,
{
    knn_join_with_observer(view, metric, config, &mut NoopObserver)
}

/// Runs the bulk self KNN join with a progress/cancellation observer.
///
/// The observer is consulted between query pages only: `cancelled` before
/// a page starts, `report` after it finalizes. Cancellation aborts the
/// join with [`JoinError::Cancelled`]; already-finalized pages are
/// discarded, never returned partially.
///
/// # Errors
///
/// See [`knn_join`].
pub fn knn_join_with_observer<S, M>(
    view: &S,
    metric: &M,
    config: &JoinConfig,
    observer: &mut dyn JoinObserver,
) -> Result<JoinResult<S::Id, M::Value>, JoinError>
where
    S: SpatialIndexView,
    M: DistanceMetric<S::Id>,
{
    config.validate()?;
    if view.dimensionality() != metric.dimensionality() {
        return Err(JoinError::DimensionMismatch {
            index: view.dimensionality(),
            metric: metric.dimensionality(),
        });
    }
    let total = view.object_count();
    if total == 0 {
        return Err(JoinError::EmptyCollection);
    }

    // In a self-join the candidate set equals the query set: materialized
    // once and shared by every outer iteration.
    let candidates = view.leaf_pages();
    let mut result = JoinResult::with_capacity(total);
    let mut processed = 0usize;
    let mut forward = true;

    for query_ref in &candidates {
        if observer.cancelled() {
            return Err(JoinError::Cancelled { processed, total });
        }
        let query = view.resolve(query_ref)?;

        // Working lists live in a dense arena, one slot per page position.
        let mut lists: Vec<NeighborList<S::Id, M::Value>> = (0..query.entries.len())
            .map(|_| NeighborList::new(config.k()))
            .collect();
        let mut page_bound = M::Value::infinite();
        let mut pruned = 0usize;

        for i in 0..candidates.len() {
            let cand_ref = if forward {
                &candidates[i]
            } else {
                &candidates[candidates.len() - 1 - i]
            };
            let dist = metric.lower_bound(&query_ref.mbr, &cand_ref.mbr)?;
            if config.pruning() && cmp_distance(&dist, &page_bound) == Ordering::Greater {
                pruned += 1;
                continue;
            }

            let candidate = view.resolve(cand_ref)?;
            process_pages(&query, &candidate, metric, config, &mut lists)?;

            let bound = page_threshold(&lists);
            debug_assert!(
                cmp_distance(&bound, &page_bound) != Ordering::Greater,
                "page bound must not increase within one scan"
            );
            page_bound = bound;
        }
        forward = !forward;

        processed += query.entries.len();
        debug!(
            page = query.page_no,
            pruned,
            candidates = candidates.len(),
            processed,
            total,
            "query page finalized"
        );
        for (entry, list) in query.entries.iter().zip(lists) {
            result.insert(entry.id, list);
        }
        observer.report(processed, total);
    }

    Ok(result)
}

/// Offers every (query object, candidate object) pair into the query
/// page's arena.
fn process_pages<I, M>(
    query: &IndexPage<I>,
    candidate: &IndexPage<I>,
    metric: &M,
    config: &JoinConfig,
    lists: &mut [NeighborList<I, M::Value>],
) -> Result<(), JoinError>
where
    I: ObjectId,
    M: DistanceMetric<I>,
{
    for (r, list) in query.entries.iter().zip(lists.iter_mut()) {
        for s in &candidate.entries {
            if !config.include_self() && r.id == s.id {
                continue;
            }
            let dist = metric.exact(r.id, s.id)?;
            list.offer(s.id, dist);
        }
    }
    Ok(())
}

/// The page-level admission bound: the maximum per-object threshold.
fn page_threshold<I, V: DistanceValue>(lists: &[NeighborList<I, V>]) -> V {
    lists
        .iter()
        .map(NeighborList::threshold)
        .reduce(DistanceValue::max)
        .unwrap_or_else(V::infinite)
}
