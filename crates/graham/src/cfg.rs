//! Fixed sizing constants for `PointSet` and the scan.
//!
//! Policy
//! - Defaults are plain constants. Runtime knobs live in small config
//!   structs (`hull::ScanCfg`, `sample::SampleCfg`) instead.

/// Capacity of `PointSet::new()`.
pub const DEFAULT_CAPACITY: usize = 10;
/// Capacity multiplier applied when an insert finds the set full.
pub const GROWTH_FACTOR: usize = 2;
/// A removal that leaves `len <= capacity / SHRINK_DIVISOR` shrinks to `len`.
pub const SHRINK_DIVISOR: usize = 2;
/// Point counts at or below this are returned as-is (sorted); no scan runs.
pub const MIN_SCAN_SIZE: usize = 2;
