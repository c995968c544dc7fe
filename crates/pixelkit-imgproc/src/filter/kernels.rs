use pixelkit_raster::RasterError;

/// A normalized 1D gaussian kernel.
///
/// The kernel holds `2 * radius + 1` coefficients indexed by the offsets
/// `[-radius, radius]` via `i + radius`. The coefficients are normalized at
/// construction so they sum to 1, and the kernel can be reused across any
/// number of blur calls with the same `(radius, sigma)`.
///
/// # Examples
///
/// ```
/// use pixelkit_imgproc::filter::kernels::GaussianKernel;
///
/// let kernel = GaussianKernel::new(2, 1.5).unwrap();
/// assert_eq!(kernel.len(), 5);
///
/// let sum = kernel.coefficients().iter().sum::<f32>();
/// assert!((sum - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: usize,
    sigma: f32,
    coefficients: Vec<f32>,
}

impl GaussianKernel {
    /// Create a normalized gaussian kernel for the given radius and sigma.
    ///
    /// # Arguments
    ///
    /// * `radius` - The kernel radius; the kernel spans `2 * radius + 1` taps.
    /// * `sigma` - The standard deviation of the gaussian.
    ///
    /// # Errors
    ///
    /// If `sigma` is not positive and finite, an error is returned.
    pub fn new(radius: usize, sigma: f32) -> Result<Self, RasterError> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(RasterError::InvalidKernelParameter(sigma));
        }

        let kernel_size = 2 * radius + 1;
        let mut coefficients = Vec::with_capacity(kernel_size);
        let sigma_sq = sigma * sigma;

        // compute the kernel
        for i in 0..kernel_size {
            let x = i as f32 - radius as f32;
            coefficients.push((-(x * x) / (2.0 * sigma_sq)).exp());
        }

        // normalize the kernel
        let norm = coefficients.iter().sum::<f32>();
        coefficients.iter_mut().for_each(|k| *k /= norm);

        Ok(Self {
            radius,
            sigma,
            coefficients,
        })
    }

    /// Get the radius of the kernel.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Get the sigma of the kernel.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Get the normalized coefficients, indexed by `offset + radius`.
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Get the number of taps in the kernel.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the kernel has no taps. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}
