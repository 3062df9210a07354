//! Exact orientation and distance predicates on integer points.
//!
//! Coordinates are widened to `i128` before subtracting, so every product of
//! two `i32` differences (and sums of a few of them) is exact.

use std::cmp::Ordering;

use crate::point::Point;

/// Turn direction of `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// z-component of `(b - a) × (c - a)`.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> i128 {
    let a = a.to_vec2();
    (b.to_vec2() - a).perp(&(c.to_vec2() - a))
}

/// Sign of the cross product: positive is CCW, negative CW, zero collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    match cross(a, b, c).cmp(&0) {
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Less => Orientation::Clockwise,
        Ordering::Equal => Orientation::Collinear,
    }
}

/// Squared Euclidean distance.
#[inline]
pub fn sqr_dist(a: Point, b: Point) -> i128 {
    let d = b.to_vec2() - a.to_vec2();
    d.dot(&d)
}

/// Polar order around `pivot`: increasing angle, nearer first on ties.
///
/// A total order on points distinct from `pivot` provided `pivot` is the
/// lexicographic minimum of the set being sorted (all angles then fall in a
/// half-open half-plane).
pub fn polar_order(pivot: Point) -> impl Fn(&Point, &Point) -> Ordering {
    move |a, b| match orientation(pivot, *a, *b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => sqr_dist(pivot, *a).cmp(&sqr_dist(pivot, *b)),
    }
}

/// Twice the signed area of the closed polygon `poly` (shoelace); positive
/// for counter-clockwise vertex order.
pub fn doubled_area(poly: &[Point]) -> i128 {
    let n = poly.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|k| poly[k].to_vec2().perp(&poly[(k + 1) % n].to_vec2()))
        .sum()
}
