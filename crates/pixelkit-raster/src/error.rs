/// An error type for raster buffers and kernel construction.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RasterError {
    /// Error when the pixel data length does not match the raster size.
    #[error("Data length ({0}) does not match the raster size ({1})")]
    InvalidBufferLength(usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel index ({0}, {1}) out of bounds for raster {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a kernel parameter is invalid.
    #[error("Gaussian sigma must be positive and finite, got {0}")]
    InvalidKernelParameter(f32),
}
