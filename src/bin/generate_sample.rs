use std::fmt::Write as _;

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Stick progression: `(position, weight)` for `n` quanta of one mode.
fn progression(origin: f64, spacing: f64, huang_rhys: f64, n: usize) -> Vec<(f64, f64)> {
    // Poisson weights S^k e^-S / k!
    let mut weight = (-huang_rhys).exp();
    (0..n)
        .map(|k| {
            if k > 0 {
                weight *= huang_rhys / k as f64;
            }
            (origin + k as f64 * spacing, weight)
        })
        .collect()
}

/// Deterministic baseline noise in `[0, amplitude)`, splitmix64-driven.
struct Baseline {
    state: u64,
    amplitude: f64,
}

impl Baseline {
    fn new(seed: u64, amplitude: f64) -> Self {
        Baseline {
            state: seed,
            amplitude,
        }
    }

    fn sample(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64 * self.amplitude
    }
}

/// Writes a synthetic 4-column vibronic spectrum:
/// `energy total fc ht`, one row per grid point.
fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_spectrum.txt".to_string());
    let mut baseline = Baseline::new(42, 0.003);

    // Energy grid: 300 → 500, step 0.5
    let energies: Vec<f64> = (0..=400).map(|i| 300.0 + i as f64 * 0.5).collect();

    // FC: allowed progression from the 0-0 origin.
    // HT: vibronically induced, offset by one quantum of the promoting mode.
    let fc_sticks = progression(340.0, 12.0, 1.2, 8);
    let ht_sticks = progression(348.0, 12.0, 0.9, 8);

    let mut text = String::new();
    for &e in &energies {
        let fc: f64 = fc_sticks
            .iter()
            .map(|&(mu, w)| gaussian(e, mu, 0.6, w))
            .sum::<f64>()
            .max(0.0);
        let ht: f64 = ht_sticks
            .iter()
            .map(|&(mu, w)| gaussian(e, mu, 0.6, 0.35 * w))
            .sum::<f64>()
            .max(0.0);
        let noise = baseline.sample();
        writeln!(text, "{e:.2} {:.6e} {fc:.6e} {ht:.6e}", fc + ht + noise)
            .context("formatting row")?;
    }

    std::fs::write(&output_path, text)
        .with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {} samples (4 columns) to {output_path}", energies.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_bounded_and_repeatable() {
        let mut a = Baseline::new(42, 0.003);
        let mut b = Baseline::new(42, 0.003);
        for _ in 0..1000 {
            let v = a.sample();
            assert!((0.0..0.003).contains(&v));
            assert_eq!(v, b.sample());
        }
    }

    #[test]
    fn progression_weights_are_poisson() {
        let sticks = progression(100.0, 10.0, 1.0, 4);
        let e = (-1.0f64).exp();
        let expected = [(100.0, e), (110.0, e), (120.0, e / 2.0), (130.0, e / 6.0)];
        for ((pos, w), (want_pos, want_w)) in sticks.iter().zip(expected) {
            assert_eq!(*pos, want_pos);
            assert!((w - want_w).abs() < 1e-15);
        }
    }
}
