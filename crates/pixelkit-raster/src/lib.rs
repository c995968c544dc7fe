#![deny(missing_docs)]
//! RGBA8 raster buffer types for pixelkit

/// raster buffer representation.
pub mod raster;

/// Error types for the raster module.
pub mod error;

pub use crate::error::RasterError;
pub use crate::raster::{RasterBuffer, RasterSize, CHANNELS};
