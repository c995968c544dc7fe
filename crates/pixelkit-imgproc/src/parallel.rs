use rayon::prelude::*;

use pixelkit_raster::{RasterBuffer, CHANNELS};

/// Apply a function to each pixel of the raster in parallel by rows.
///
/// The source and destination rasters must have the same size; the closure
/// receives one interleaved RGBA source pixel and the matching destination
/// pixel. Rows are disjoint, so no synchronization is needed.
pub fn par_iter_rows(
    src: &RasterBuffer,
    dst: &mut RasterBuffer,
    f: impl Fn(&[u8], &mut [u8]) + Send + Sync,
) {
    debug_assert_eq!(src.size(), dst.size());

    let row_len = CHANNELS * src.cols();
    src.as_slice()
        .par_chunks_exact(row_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(row_len))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(CHANNELS)
                .zip(dst_chunk.chunks_exact_mut(CHANNELS))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
