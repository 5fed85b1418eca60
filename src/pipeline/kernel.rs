//! Gaussian line-shape kernel.
//!
//! The kernel is sampled at unit spacing on the sample index axis, not on
//! the energy axis. Its effective width in energy units therefore depends
//! on the input's sampling density.

use std::f64::consts::LN_2;

/// Samples per unit of FWHM.
const SAMPLES_PER_FWHM: f64 = 10.0;

/// Standard deviation of a Gaussian with the given full width at half maximum.
pub fn sigma_from_fwhm(fwhm: f64) -> f64 {
    fwhm / (8.0 * LN_2).sqrt()
}

/// Number of kernel points: `floor(fwhm * 10)`, never less than one.
pub fn kernel_len(fwhm: f64) -> usize {
    // `as` truncates toward zero and maps NaN/negatives to 0.
    ((fwhm * SAMPLES_PER_FWHM) as usize).max(1)
}

/// Gaussian kernel for `fwhm`, normalized to unit sum.
///
/// Points sit at `i - (n - 1) / 2` for `i in 0..n`, so even lengths are
/// centered between two samples. A single-point kernel is the identity.
pub fn gaussian_kernel(fwhm: f64) -> Vec<f64> {
    let n = kernel_len(fwhm);
    if n == 1 {
        return vec![1.0];
    }

    let sigma = sigma_from_fwhm(fwhm);
    let center = (n as f64 - 1.0) / 2.0;
    let mut kernel: Vec<f64> = (0..n)
        .map(|i| {
            let x = i as f64 - center;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}
