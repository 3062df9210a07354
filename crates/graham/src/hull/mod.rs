//! Graham scan over a deduplicated `PointSet`.
//!
//! Pipeline
//! - `ingest`: insert points (duplicates rejected) while tracking the pivot,
//!   the lexicographically smallest point; compact the set.
//! - `convex_hull`: sets of at most `MIN_SCAN_SIZE` points are their own hull
//!   (sorted); everything else goes through `graham_scan`.
//! - `graham_scan`: pivot to position 0, polar sort of the rest around it,
//!   then a stack sweep keeping only strict counter-clockwise turns.
//!
//! Collinear points on a hull edge are dropped; only the extreme points of a
//! collinear run survive. Fully collinear input yields its two endpoints.
//!
//! Cross-refs: `predicates::{orientation, polar_order}`, `point_set::PointSet`.

mod predicates;
mod scan;

pub use predicates::{doubled_area, orientation, polar_order, sqr_dist, Orientation};
pub use scan::{convex_hull, graham_scan, ingest, Ingest};

/// Vertex order of a computed hull.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullOrder {
    /// Lexicographic point order (canonical, input-order independent).
    #[default]
    Sorted,
    /// Boundary order as swept: counter-clockwise, starting at the pivot.
    CounterClockwise,
}

/// Scan configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanCfg {
    pub order: HullOrder,
}
