use crate::parallel;
use pixelkit_raster::RasterBuffer;

/// Define the RGB weights for the luma computation.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Perceptual brightness of one interleaved RGBA pixel.
///
/// Shared with the sobel operator, which runs on the same luma plane.
pub(crate) fn luma(pixel: &[u8]) -> f32 {
    RW * pixel[0] as f32 + GW * pixel[1] as f32 + BW * pixel[2] as f32
}

// Exact floor of 0.299*R + 0.587*G + 0.114*B. The f32 sum can land just
// below a whole value for an already-gray pixel (e.g. 122 -> 121.99999),
// which would darken the pixel on every pass; the integer form is the true
// floor for all inputs, so converting a gray raster is a fixed point.
fn quantized_luma(pixel: &[u8]) -> u8 {
    let r = pixel[0] as u32;
    let g = pixel[1] as u32;
    let b = pixel[2] as u32;
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Convert an RGBA raster to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// Each output pixel is `(gray, gray, gray, 255)` with `gray = floor(Y)`,
/// computed exactly in integer arithmetic. The conversion is pointwise and
/// total over all valid rasters, and applying it twice yields the same
/// result as once.
///
/// # Arguments
///
/// * `src` - The input RGBA8 raster.
///
/// # Example
///
/// ```
/// use pixelkit_raster::{RasterBuffer, RasterSize};
/// use pixelkit_imgproc::color::gray_from_rgba;
///
/// let raster = RasterBuffer::from_size_val(
///     RasterSize {
///         width: 4,
///         height: 5,
///     },
///     [255, 0, 0, 255],
/// );
///
/// let gray = gray_from_rgba(&raster);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// assert_eq!(gray.pixel(0, 0).unwrap(), [76, 76, 76, 255]);
/// ```
pub fn gray_from_rgba(src: &RasterBuffer) -> RasterBuffer {
    let mut dst = RasterBuffer::from_size_val(src.size(), [0, 0, 0, 255]);

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let gray = quantized_luma(src_pixel);
        dst_pixel[0] = gray;
        dst_pixel[1] = gray;
        dst_pixel[2] = gray;
        dst_pixel[3] = 255;
    });

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelkit_raster::{RasterError, RasterSize};

    #[test]
    fn gray_from_rgba_regression() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 1,
            height: 1,
        };

        for (pixel, expected) in [
            ([255, 255, 255, 255], 255),
            ([0, 0, 0, 255], 0),
            ([255, 0, 0, 255], 76),
            ([0, 255, 0, 255], 149),
            ([0, 0, 255, 255], 29),
            ([0, 128, 255, 255], 104),
            ([200, 100, 50, 255], 124),
        ] {
            let raster = RasterBuffer::from_size_val(size, pixel);
            let gray = gray_from_rgba(&raster);
            assert_eq!(gray.pixel(0, 0)?, [expected, expected, expected, 255]);
        }

        Ok(())
    }

    #[test]
    fn gray_from_rgba_fixed_point_on_gray_input() -> Result<(), RasterError> {
        // the weights sum to 1, so an already-gray pixel must come back
        // unchanged; values like 122 regress if the floor is taken on the
        // f32 sum instead of computed exactly
        let size = RasterSize {
            width: 16,
            height: 16,
        };
        let mut raster = RasterBuffer::from_size_val(size, [0, 0, 0, 255]);
        for (i, pixel) in raster.as_slice_mut().chunks_exact_mut(4).enumerate() {
            let v = i as u8;
            pixel[..3].copy_from_slice(&[v, v, v]);
        }

        let gray = gray_from_rgba(&raster);
        assert_eq!(gray, raster);

        Ok(())
    }

    #[test]
    fn gray_from_rgba_idempotent() -> Result<(), RasterError> {
        let size = RasterSize {
            width: 4,
            height: 3,
        };
        let mut raster = RasterBuffer::from_size_val(size, [0, 0, 0, 255]);
        for (i, v) in raster.as_slice_mut().iter_mut().enumerate() {
            *v = (i * 37 % 256) as u8;
        }

        let once = gray_from_rgba(&raster);
        let twice = gray_from_rgba(&once);

        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn gray_from_rgba_preserves_dimensions() {
        use rand::Rng;
        let mut rng = rand::rng();

        for _ in 0..10 {
            let size = RasterSize {
                width: rng.random_range(1..32),
                height: rng.random_range(1..32),
            };
            let raster = RasterBuffer::from_size_val(size, [12, 34, 56, 78]);
            let gray = gray_from_rgba(&raster);
            assert_eq!(gray.size(), size);
        }
    }

    #[test]
    fn gray_from_rgba_forces_opaque_alpha() {
        let raster = RasterBuffer::from_size_val(
            RasterSize {
                width: 3,
                height: 3,
            },
            [10, 20, 30, 0],
        );

        let gray = gray_from_rgba(&raster);
        for pixel in gray.as_slice().chunks_exact(4) {
            assert_eq!(pixel[3], 255);
        }
    }
}
