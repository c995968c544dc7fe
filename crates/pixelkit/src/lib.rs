#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pixelkit_raster as raster;

#[doc(inline)]
pub use pixelkit_imgproc as imgproc;
