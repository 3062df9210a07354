//! Integer convex hulls via Graham scan.
//!
//! Layout
//! - `point`: the 2D integer `Point` (ordering, parsing, formatting).
//! - `point_set`: `PointSet`, an ordered, optionally deduplicating container
//!   with an explicit growth/shrink policy and set algebra.
//! - `hull`: orientation predicates, polar ordering and the scan itself.
//! - `sample`: seeded point clouds for benches, tests and the CLI.
//!
//! All arithmetic is exact (`i128` intermediates); there is no floating point
//! anywhere on the hull path.

pub mod cfg;
pub mod hull;
pub mod point;
pub mod point_set;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, graham_scan, ingest, HullOrder, Ingest, Orientation, ScanCfg};
pub use point::{ParsePointError, Point};
pub use point_set::PointSet;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        convex_hull, doubled_area, graham_scan, ingest, orientation, polar_order, sqr_dist,
        HullOrder, Ingest, Orientation, ScanCfg,
    };
    pub use crate::point::{ParsePointError, Point};
    pub use crate::point_set::PointSet;
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg, Shape};
    pub use nalgebra::Vector2 as Vec2;
}
