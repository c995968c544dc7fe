use pixelkit_imgproc::color::gray_from_rgba;
use pixelkit_imgproc::edge::sobel;
use pixelkit_imgproc::filter::{gaussian_blur, kernels::GaussianKernel};
use pixelkit_raster::{RasterBuffer, RasterError, RasterSize, CHANNELS};

fn checkerboard(size: RasterSize) -> RasterBuffer {
    let mut raster = RasterBuffer::from_size_val(size, [0, 0, 0, 255]);
    for y in 0..size.height {
        for x in 0..size.width {
            if (x + y) % 2 == 0 {
                let offset = (y * size.width + x) * CHANNELS;
                raster.as_slice_mut()[offset..offset + 3].copy_from_slice(&[255, 255, 255]);
            }
        }
    }
    raster
}

#[test]
fn blur_then_sobel_pipeline() -> Result<(), RasterError> {
    let size = RasterSize {
        width: 16,
        height: 16,
    };
    let input = checkerboard(size);

    let kernel = GaussianKernel::new(2, 1.5)?;
    let blurred = gaussian_blur(&input, &kernel);
    let edges = sobel(&blurred);

    assert_eq!(blurred.size(), size);
    assert_eq!(edges.size(), size);

    // every stage outputs a fully opaque raster
    for pixel in blurred.as_slice().chunks_exact(CHANNELS) {
        assert_eq!(pixel[3], 255);
    }
    for pixel in edges.as_slice().chunks_exact(CHANNELS) {
        assert_eq!(pixel[3], 255);
    }

    Ok(())
}

#[test]
fn grayscale_then_sobel_matches_direct_sobel() -> Result<(), RasterError> {
    // sobel runs on the luma plane, so a grayscale pre-pass only differs
    // by the floor quantization of the gray channel; on pixels that are
    // already gray the two paths agree exactly
    let size = RasterSize {
        width: 8,
        height: 8,
    };
    let mut input = RasterBuffer::from_size_val(size, [0, 0, 0, 255]);
    for y in 0..size.height {
        for x in 0..size.width {
            let v = ((x * 255) / (size.width - 1)) as u8;
            let offset = (y * size.width + x) * CHANNELS;
            input.as_slice_mut()[offset..offset + 3].copy_from_slice(&[v, v, v]);
        }
    }

    let direct = sobel(&input);
    let via_gray = sobel(&gray_from_rgba(&input));

    assert_eq!(direct, via_gray);
    Ok(())
}

#[test]
fn transforms_are_safe_across_threads() -> Result<(), RasterError> {
    // each call owns its buffers, so concurrent invocations need no locking
    let size = RasterSize {
        width: 32,
        height: 24,
    };
    let input = checkerboard(size);
    let kernel = GaussianKernel::new(3, 2.0)?;

    let expected_blur = gaussian_blur(&input, &kernel);
    let expected_edges = sobel(&input);

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            handles.push(scope.spawn(|| gaussian_blur(&input, &kernel)));
            handles.push(scope.spawn(|| sobel(&input)));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().expect("worker panicked");
            if i % 2 == 0 {
                assert_eq!(result, expected_blur);
            } else {
                assert_eq!(result, expected_edges);
            }
        }
    });

    Ok(())
}
