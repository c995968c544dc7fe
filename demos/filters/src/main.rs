use std::path::PathBuf;
use std::time::Instant;

use argh::{FromArgValue, FromArgs};

use pixelkit::imgproc::color::gray_from_rgba;
use pixelkit::imgproc::edge::sobel;
use pixelkit::imgproc::filter::{gaussian_blur, kernels::GaussianKernel};
use pixelkit::raster::{RasterBuffer, RasterSize};

#[derive(Debug, Clone, Copy)]
enum Transform {
    Blur,
    Gray,
    Sobel,
}

impl FromArgValue for Transform {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "blur" => Ok(Self::Blur),
            "gray" | "grayscale" => Ok(Self::Gray),
            "sobel" => Ok(Self::Sobel),
            other => Err(format!(
                "unknown transform '{other}', expected blur, gray or sobel"
            )),
        }
    }
}

/// Apply a CPU pixel transform to an image file and report the elapsed time.
#[derive(FromArgs)]
struct Args {
    /// path to the input image
    #[argh(positional)]
    input: PathBuf,

    /// path to write the transformed image to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// transform to apply: blur, gray or sobel
    #[argh(option, short = 't')]
    transform: Transform,

    /// blur kernel radius, picked from the image size when omitted
    #[argh(option)]
    radius: Option<usize>,

    /// blur gaussian sigma, picked from the image size when omitted
    #[argh(option)]
    sigma: Option<f32>,
}

// tuning presets: a light kernel for small images, a heavy one for large
fn blur_preset(size: RasterSize) -> (usize, f32) {
    if size.width.max(size.height) < 1024 {
        (10, 3.3)
    } else {
        (25, 16.3)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let decoded = image::open(&args.input)?.to_rgba8();
    let size = RasterSize {
        width: decoded.width() as usize,
        height: decoded.height() as usize,
    };
    let input = RasterBuffer::new(size, decoded.into_raw())?;
    log::info!("loaded {} ({})", args.input.display(), size);

    let started = Instant::now();
    let output = match args.transform {
        Transform::Blur => {
            let (preset_radius, preset_sigma) = blur_preset(size);
            let radius = args.radius.unwrap_or(preset_radius);
            let sigma = args.sigma.unwrap_or(preset_sigma);
            let kernel = GaussianKernel::new(radius, sigma)?;
            log::info!("blur with radius {radius} and sigma {sigma}");
            gaussian_blur(&input, &kernel)
        }
        Transform::Gray => gray_from_rgba(&input),
        Transform::Sobel => sobel(&input),
    };
    let elapsed = started.elapsed();
    log::info!("transform finished in {elapsed:?}");

    let encoded = image::RgbaImage::from_raw(
        size.width as u32,
        size.height as u32,
        output.into_vec(),
    )
    .ok_or("output buffer does not match the image dimensions")?;
    encoded.save(&args.output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
