use rayon::prelude::*;

use pixelkit_raster::{RasterBuffer, CHANNELS};

use super::kernels::GaussianKernel;

/// Blur a raster with a separable gaussian filter.
///
/// The 2D gaussian factors into two 1D passes, horizontal then vertical,
/// which is O(N * radius) instead of O(N * radius^2). Each pass accumulates
/// R, G and B independently in floating point, clamps the sums to [0, 255]
/// and truncates toward zero; alpha is forced to 255. Kernel taps that fall
/// outside the raster are skipped rather than clamped to the edge, and the
/// lost partial weight is not renormalized, so near-edge pixels come out
/// darker. Callers that need exact edge fidelity must pad the input first.
///
/// A kernel with radius 0 degenerates to an identity copy (alpha still
/// forced opaque). The input is never mutated; the result is a freshly
/// allocated raster of the same size.
///
/// # Arguments
///
/// * `src` - The source RGBA8 raster.
/// * `kernel` - The gaussian kernel, reusable across calls.
///
/// # Examples
///
/// ```
/// use pixelkit_raster::{RasterBuffer, RasterSize};
/// use pixelkit_imgproc::filter::{gaussian_blur, kernels::GaussianKernel};
///
/// let src = RasterBuffer::from_size_val(
///     RasterSize {
///         width: 5,
///         height: 5,
///     },
///     [255, 255, 255, 255],
/// );
///
/// let kernel = GaussianKernel::new(1, 1.0).unwrap();
/// let dst = gaussian_blur(&src, &kernel);
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn gaussian_blur(src: &RasterBuffer, kernel: &GaussianKernel) -> RasterBuffer {
    let mut mid = RasterBuffer::from_size_val(src.size(), [0, 0, 0, 255]);
    horizontal_pass(src, &mut mid, kernel);

    let mut dst = RasterBuffer::from_size_val(src.size(), [0, 0, 0, 255]);
    vertical_pass(&mid, &mut dst, kernel);

    dst
}

// f32 coefficient sums can land just below a whole channel value and the
// truncation would then lose a full intensity step on uniform regions, so
// both passes accumulate in f64.
fn taps_f64(kernel: &GaussianKernel) -> Vec<f64> {
    kernel.coefficients().iter().map(|&k| f64::from(k)).collect()
}

fn horizontal_pass(src: &RasterBuffer, dst: &mut RasterBuffer, kernel: &GaussianKernel) {
    debug_assert_eq!(src.size(), dst.size());

    let cols = src.cols();
    let radius = kernel.radius() as isize;
    let taps = taps_f64(kernel);
    let row_len = cols * CHANNELS;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(r, dst_row)| {
            let src_row = &src_data[r * row_len..(r + 1) * row_len];
            for c in 0..cols {
                let mut acc = [0.0f64; 3];
                for (tap, &k) in taps.iter().enumerate() {
                    let x = c as isize + tap as isize - radius;
                    if x >= 0 && x < cols as isize {
                        let idx = x as usize * CHANNELS;
                        for (ch, acc_val) in acc.iter_mut().enumerate() {
                            *acc_val += f64::from(src_row[idx + ch]) * k;
                        }
                    }
                }
                write_pixel(&mut dst_row[c * CHANNELS..(c + 1) * CHANNELS], &acc);
            }
        });
}

fn vertical_pass(src: &RasterBuffer, dst: &mut RasterBuffer, kernel: &GaussianKernel) {
    debug_assert_eq!(src.size(), dst.size());

    let cols = src.cols();
    let rows = src.rows();
    let radius = kernel.radius() as isize;
    let taps = taps_f64(kernel);
    let row_len = cols * CHANNELS;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(r, dst_row)| {
            for c in 0..cols {
                let mut acc = [0.0f64; 3];
                for (tap, &k) in taps.iter().enumerate() {
                    let y = r as isize + tap as isize - radius;
                    if y >= 0 && y < rows as isize {
                        let idx = y as usize * row_len + c * CHANNELS;
                        for (ch, acc_val) in acc.iter_mut().enumerate() {
                            *acc_val += f64::from(src_data[idx + ch]) * k;
                        }
                    }
                }
                write_pixel(&mut dst_row[c * CHANNELS..(c + 1) * CHANNELS], &acc);
            }
        });
}

// clamp to [0, 255] first; the as-cast truncates toward zero
fn write_pixel(dst_pixel: &mut [u8], acc: &[f64; 3]) {
    for (ch, &acc_val) in acc.iter().enumerate() {
        dst_pixel[ch] = acc_val.clamp(0.0, 255.0) as u8;
    }
    dst_pixel[3] = 255;
}
