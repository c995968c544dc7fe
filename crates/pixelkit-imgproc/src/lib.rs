#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// edge detection module.
pub mod edge;

/// raster filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;
