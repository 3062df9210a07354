use tracing::debug;

use super::predicates::{orientation, polar_order, Orientation};
use super::{HullOrder, ScanCfg};
use crate::cfg::MIN_SCAN_SIZE;
use crate::point::Point;
use crate::point_set::PointSet;

/// Deduplicated input plus the index of its lexicographically smallest point.
#[derive(Clone, Debug)]
pub struct Ingest {
    pub set: PointSet,
    pub pivot: usize,
}

/// Insert `points` in order, rejecting duplicates and tracking the pivot.
///
/// The set is pre-sized from the iterator's lower size bound and compacted
/// with `shrink_to_fit` at the end.
pub fn ingest<I>(points: I) -> Ingest
where
    I: IntoIterator<Item = Point>,
{
    let points = points.into_iter();
    let mut set = PointSet::with_capacity(points.size_hint().0.max(1), true);
    let mut pivot = 0usize;
    for p in points {
        if set.add(p) && p < set[pivot] {
            pivot = set.len() - 1;
        }
    }
    set.shrink_to_fit();
    Ingest { set, pivot }
}

/// Graham scan on a deduplicated set whose lexicographic minimum is at
/// `pivot`. Reorders `set` (pivot first, the rest in polar order).
///
/// # Panics
/// If `set.len() <= MIN_SCAN_SIZE` or `pivot` is out of range.
pub fn graham_scan(set: &mut PointSet, pivot: usize, cfg: &ScanCfg) -> PointSet {
    let n = set.len();
    assert!(
        n > MIN_SCAN_SIZE,
        "graham_scan needs more than {MIN_SCAN_SIZE} points, got {n}"
    );
    set.swap(0, pivot);
    let anchor = set[0];
    set.sort_by(1..n, polar_order(anchor));

    let mut hull = PointSet::with_capacity(n, false);
    hull.add(anchor);
    hull.add(set[1]);
    for &p in set.iter().skip(2) {
        while hull.len() >= 2
            && orientation(*hull.at(-2), *hull.at(-1), p) != Orientation::CounterClockwise
        {
            hull.remove_last();
        }
        hull.add(p);
    }
    debug!(points = n, vertices = hull.len(), pivot = %anchor, "graham scan");

    if cfg.order == HullOrder::Sorted {
        let len = hull.len();
        hull.sort(0..len);
    }
    hull
}

/// Convex hull of `points`.
///
/// Up to `MIN_SCAN_SIZE` distinct points are returned sorted; an empty input
/// gives an empty set. Otherwise the vertices come back in `cfg.order`.
pub fn convex_hull<I>(points: I, cfg: &ScanCfg) -> PointSet
where
    I: IntoIterator<Item = Point>,
{
    let Ingest { mut set, pivot } = ingest(points);
    let n = set.len();
    if n <= MIN_SCAN_SIZE {
        debug!(points = n, "trivial hull");
        set.sort(0..n);
        return set;
    }
    graham_scan(&mut set, pivot, cfg)
}
