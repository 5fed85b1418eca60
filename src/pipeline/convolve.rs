//! Same-length linear convolution with zero padding.

/// Convolve `signal` with `kernel`, returning `signal.len()` samples.
///
/// The output is the centered slice of the full convolution, starting at
/// index `(kernel.len() - 1) / 2`. Samples outside the signal count as zero.
/// The kernel may be longer than the signal.
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = kernel.len();
    if n == 0 || m == 0 {
        return vec![0.0; n];
    }

    let start = (m - 1) / 2;
    (0..n)
        .map(|i| {
            let k = i + start;
            let lo = k.saturating_sub(m - 1);
            let hi = k.min(n - 1);
            (lo..=hi).map(|j| signal[j] * kernel[k - j]).sum()
        })
        .collect()
}
