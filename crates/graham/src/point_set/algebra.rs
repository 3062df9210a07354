//! Set algebra on `PointSet`: equality, difference, intersection.
//!
//! All operations compare by value and never mutate their operands.

use std::ops::{BitAnd, Sub};

use super::PointSet;

impl PointSet {
    /// Same cardinality and mutual containment. Order is irrelevant, and
    /// the check is symmetric even when either side holds duplicates.
    pub fn set_eq(&self, other: &PointSet) -> bool {
        self.len() == other.len()
            && self.iter().all(|p| other.contains(p))
            && other.iter().all(|p| self.contains(p))
    }

    /// Points of `self` not in `other`, in `self`'s order.
    pub fn difference(&self, other: &PointSet) -> PointSet {
        let mut out = PointSet::with_capacity(self.capacity, true);
        for p in self.iter().filter(|p| !other.contains(p)) {
            out.add(*p);
        }
        out
    }

    /// Points of `other` that also occur in `self`, in `other`'s order.
    ///
    /// When `other` is itself deduplicating its points are already distinct,
    /// so inserts skip the duplicate scan; otherwise they keep it, and the
    /// result is duplicate-free either way.
    pub fn intersection(&self, other: &PointSet) -> PointSet {
        let mut out = PointSet::with_capacity(self.len().min(other.len()), !other.dedup);
        for p in other.iter().filter(|p| self.contains(p)) {
            out.add(*p);
        }
        out.dedup = true;
        out
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl Sub for &PointSet {
    type Output = PointSet;
    #[inline]
    fn sub(self, rhs: &PointSet) -> PointSet {
        self.difference(rhs)
    }
}

impl BitAnd for &PointSet {
    type Output = PointSet;
    #[inline]
    fn bitand(self, rhs: &PointSet) -> PointSet {
        self.intersection(rhs)
    }
}
