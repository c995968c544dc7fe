//! Filter operations
//!
//! This module provides separable filter operations for raster processing.

/// Filter kernels
pub mod kernels;

/// Separable gaussian blur
mod blur;
pub use blur::gaussian_blur;
