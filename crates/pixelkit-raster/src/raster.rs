use crate::error::RasterError;

/// Number of interleaved channels in a raster buffer (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Raster size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use pixelkit_raster::RasterSize;
///
/// let size = RasterSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels
    pub width: usize,
    /// Height of the raster in pixels
    pub height: usize,
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an RGBA8 raster with interleaved pixel data.
///
/// The pixel data is stored row-major as a contiguous `Vec<u8>` of
/// (r, g, b, a) quadruplets, so its length is `width * height * 4`.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterBuffer {
    size: RasterSize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Create a new raster from interleaved RGBA8 pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `data` - The interleaved RGBA8 pixel data, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the raster size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelkit_raster::{RasterBuffer, RasterSize};
    ///
    /// let raster = RasterBuffer::new(
    ///     RasterSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.size().width, 10);
    /// assert_eq!(raster.size().height, 20);
    /// ```
    pub fn new(size: RasterSize, data: Vec<u8>) -> Result<Self, RasterError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(RasterError::InvalidBufferLength(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new raster with every pixel set to the given RGBA value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `pixel` - The RGBA value to fill the raster with.
    pub fn from_size_val(size: RasterSize, pixel: [u8; CHANNELS]) -> Self {
        let mut data = Vec::with_capacity(size.width * size.height * CHANNELS);
        for _ in 0..size.width * size.height {
            data.extend_from_slice(&pixel);
        }

        Self { size, data }
    }

    /// Get the size of the raster in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the raster.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the raster.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the interleaved pixel data as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the interleaved pixel data as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return the interleaved pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the RGBA value of the pixel at the given coordinates.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelkit_raster::{RasterBuffer, RasterSize};
    ///
    /// let raster = RasterBuffer::from_size_val(
    ///     RasterSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     [1, 2, 3, 255],
    /// );
    ///
    /// assert_eq!(raster.pixel(1, 0).unwrap(), [1, 2, 3, 255]);
    /// ```
    pub fn pixel(&self, x: usize, y: usize) -> Result<[u8; CHANNELS], RasterError> {
        if x >= self.width() || y >= self.height() {
            return Err(RasterError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        let mut pixel = [0u8; CHANNELS];
        pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);

        Ok(pixel)
    }
}
