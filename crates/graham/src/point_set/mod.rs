//! Ordered point container with explicit capacity policy and set algebra.
//!
//! Purpose
//! - Hold the working points of a hull computation: positional access
//!   (including cyclic negative indices), range sorts, stack-style pops.
//! - Reject duplicates on insert when `dedup` is on, so the container can be
//!   used as a set (`difference`, `intersection`, `set_eq`).
//!
//! Capacity policy
//! - `capacity` is tracked explicitly instead of relying on `Vec` growth:
//!   a full set doubles before inserting; after a removal that leaves
//!   `len <= capacity / 2` (and `len > 0`) capacity drops to exactly `len`.
//! - Invariants: `capacity >= len`, and `capacity > 0` whenever non-empty.
//!
//! Not synchronized; wrap in a lock to share mutably across threads.

mod algebra;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::cfg::{DEFAULT_CAPACITY, GROWTH_FACTOR, SHRINK_DIVISOR};
use crate::point::Point;

/// Ordered, optionally deduplicating collection of points.
#[derive(Debug)]
pub struct PointSet {
    points: Vec<Point>,
    capacity: usize,
    dedup: bool,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet {
    /// Empty set with `DEFAULT_CAPACITY` slots and deduplication on.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, true)
    }

    /// Empty set with an explicit capacity and deduplication flag.
    pub fn with_capacity(capacity: usize, dedup: bool) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            dedup,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Slots currently reserved under the growth/shrink policy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether inserts reject points already present.
    #[inline]
    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// Position of the first point equal to `p` (linear scan).
    pub fn index_of(&self, p: &Point) -> Option<usize> {
        self.points.iter().position(|q| q == p)
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.index_of(p).is_some()
    }

    /// Append `p`. Returns `false` (and leaves the set untouched) when
    /// deduplication is on and an equal point is already present.
    pub fn add(&mut self, p: Point) -> bool {
        if self.dedup && self.contains(&p) {
            return false;
        }
        if self.points.len() == self.capacity {
            self.fit_capacity_to((self.capacity * GROWTH_FACTOR).max(1));
        }
        self.points.push(p);
        true
    }

    /// Remove the point equal to `p`, if present.
    pub fn remove(&mut self, p: &Point) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    /// Remove and return the point at `i`, shifting later points left.
    ///
    /// # Panics
    /// If `i >= len`.
    pub fn remove_at(&mut self, i: usize) -> Point {
        let len = self.points.len();
        assert!(
            i < len,
            "remove_at index {i} out of range for PointSet of length {len}"
        );
        let removed = self.points.remove(i);
        let len = self.points.len();
        if len != 0 && len <= self.capacity / SHRINK_DIVISOR {
            self.fit_capacity_to(len);
        }
        removed
    }

    /// Remove and return the last point.
    ///
    /// # Panics
    /// If the set is empty.
    pub fn remove_last(&mut self) -> Point {
        assert!(!self.points.is_empty(), "remove_last on an empty PointSet");
        self.remove_at(self.points.len() - 1)
    }

    /// Drop unused capacity (no-op when empty or already exact).
    pub fn shrink_to_fit(&mut self) {
        let len = self.points.len();
        if len != self.capacity && len != 0 {
            self.fit_capacity_to(len);
        }
    }

    fn fit_capacity_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.points.len());
        if new_capacity > self.points.capacity() {
            self.points.reserve_exact(new_capacity - self.points.len());
        } else {
            self.points.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }

    /// Sort `range` by the lexicographic point order.
    ///
    /// # Panics
    /// If `range` is not within `0..len`.
    pub fn sort(&mut self, range: Range<usize>) {
        self.points[range].sort_unstable();
    }

    /// Sort `range` with a caller-supplied total order.
    ///
    /// # Panics
    /// If `range` is not within `0..len`.
    pub fn sort_by<F>(&mut self, range: Range<usize>, compare: F)
    where
        F: FnMut(&Point, &Point) -> Ordering,
    {
        self.points[range].sort_unstable_by(compare);
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.points.swap(i, j);
    }

    /// Cyclic access: `i >= 0` is position `i`, `i < 0` is `len + i`
    /// (so `-1` is the last point).
    ///
    /// # Panics
    /// If the translated position is out of range.
    #[inline]
    pub fn at(&self, i: isize) -> &Point {
        &self.points[self.resolve(i)]
    }

    /// Mutable counterpart of `at`; writes land in the set.
    #[inline]
    pub fn at_mut(&mut self, i: isize) -> &mut Point {
        let k = self.resolve(i);
        &mut self.points[k]
    }

    fn resolve(&self, i: isize) -> usize {
        let len = self.points.len();
        let k = if i >= 0 {
            Some(i.unsigned_abs())
        } else {
            len.checked_sub(i.unsigned_abs())
        };
        match k {
            Some(k) if k < len => k,
            _ => panic!("index {i} out of range for PointSet of length {len}"),
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// Replace contents, capacity and dedup flag with a deep copy of `other`.
    pub fn assign(&mut self, other: &PointSet) {
        self.points.clear();
        self.fit_capacity_to(other.capacity);
        self.points.extend_from_slice(&other.points);
        self.dedup = other.dedup;
    }
}

impl Clone for PointSet {
    fn clone(&self) -> Self {
        let mut points = Vec::with_capacity(self.capacity);
        points.extend_from_slice(&self.points);
        Self {
            points,
            capacity: self.capacity,
            dedup: self.dedup,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Index<usize> for PointSet {
    type Output = Point;
    #[inline]
    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl IndexMut<usize> for PointSet {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Point {
        &mut self.points[i]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.add(p);
        }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

/// One `x,y` line per point, in current order.
impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.points {
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}
