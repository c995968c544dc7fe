use rayon::prelude::*;

use pixelkit_raster::{RasterBuffer, CHANNELS};

use crate::color::luma;

/// Fixed 3x3 sobel kernels for the x and y gradients.
const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Pixels the sobel operator never writes keep this value: the one-pixel
/// border of every output, and the whole output when the input has no
/// interior (width or height below 3).
const BORDER_PIXEL: [u8; CHANNELS] = [0, 0, 0, 255];

/// Compute the per-pixel sobel gradient magnitude of a raster.
///
/// The input is reduced to a scalar luma plane (same weights as
/// [`crate::color::gray_from_rgba`], without the output quantization), then
/// the two fixed 3x3 kernels are applied over each interior 3x3
/// neighborhood and the output pixel is
/// `(m, m, m, 255)` with `m = min(255, round(sqrt(gx^2 + gy^2)))`.
///
/// Only interior pixels (`1 <= x < width-1`, `1 <= y < height-1`) are
/// written; the border keeps opaque black. Inputs with `width < 3` or
/// `height < 3` have no interior and return an all-border raster.
///
/// # Arguments
///
/// * `src` - The input RGBA8 raster.
///
/// # Examples
///
/// ```
/// use pixelkit_raster::{RasterBuffer, RasterSize};
/// use pixelkit_imgproc::edge::sobel;
///
/// let flat = RasterBuffer::from_size_val(
///     RasterSize {
///         width: 4,
///         height: 4,
///     },
///     [200, 200, 200, 255],
/// );
///
/// let edges = sobel(&flat);
/// assert_eq!(edges.pixel(1, 1).unwrap(), [0, 0, 0, 255]);
/// ```
pub fn sobel(src: &RasterBuffer) -> RasterBuffer {
    let mut dst = RasterBuffer::from_size_val(src.size(), BORDER_PIXEL);

    let cols = src.cols();
    let rows = src.rows();
    if cols < 3 || rows < 3 {
        return dst;
    }

    let luma_plane: Vec<f32> = src.as_slice().chunks_exact(CHANNELS).map(luma).collect();

    let row_len = cols * CHANNELS;
    dst.as_slice_mut()[row_len..(rows - 1) * row_len]
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(i, dst_row)| {
            let r = i + 1;
            for c in 1..cols - 1 {
                let mut gx = 0.0f32;
                let mut gy = 0.0f32;
                for (ky, (kernel_x_row, kernel_y_row)) in
                    SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate()
                {
                    let neighbor_row = (r + ky - 1) * cols;
                    for kx in 0..3 {
                        let val = luma_plane[neighbor_row + c + kx - 1];
                        gx += kernel_x_row[kx] * val;
                        gy += kernel_y_row[kx] * val;
                    }
                }

                let magnitude = (gx * gx + gy * gy).sqrt().round().min(255.0) as u8;
                let dst_pixel = &mut dst_row[c * CHANNELS..(c + 1) * CHANNELS];
                dst_pixel[0] = magnitude;
                dst_pixel[1] = magnitude;
                dst_pixel[2] = magnitude;
                dst_pixel[3] = 255;
            }
        });

    dst
}
