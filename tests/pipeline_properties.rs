//! Property tests for ingestion and the transform pipeline.
//!
//! # What this covers
//!
//! - Row cleaning keeps exactly the fully numeric rows.
//! - Loaded energies are non-decreasing.
//! - Shift is additive on the unfiltered energy axis.
//! - Broadening preserves peak height.
//! - The energy cutoff keeps exactly the samples at or below it.
//! - Kernels sum to one.
//! - A sub-resolution FWHM reproduces the input.

use proptest::prelude::*;

use spectrum_broadener::data::loader::parse_table;
use spectrum_broadener::pipeline::{self, kernel, TransformParams};
use spectrum_broadener::{IngestMode, Sample, Spectrum};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Row {
    Valid(f64, f64),
    Garbage(String),
}

impl Row {
    fn render(&self) -> String {
        match self {
            Row::Valid(e, i) => format!("{e} {i}"),
            Row::Garbage(s) => s.clone(),
        }
    }
}

fn row() -> impl Strategy<Value = Row> {
    prop_oneof![
        3 => (-1.0e4..1.0e4f64, -10.0..1.0e3f64).prop_map(|(e, i)| Row::Valid(e, i)),
        1 => prop_oneof![
            Just("nan 1.0".to_string()),
            Just("1.0".to_string()),
            Just("1.0 inf".to_string()),
            "[a-z]{1,6} [0-9]{1,3}",
            "[0-9]{1,3} [a-z]{1,6}",
        ]
        .prop_map(Row::Garbage),
    ]
}

fn spectrum(min_len: usize) -> impl Strategy<Value = Spectrum> {
    prop::collection::vec((-1.0e3..1.0e3f64, 0.0..100.0f64), min_len..80).prop_map(|pairs| {
        Spectrum::from_samples(pairs.into_iter().map(|(e, i)| Sample::new(e, i)).collect())
    })
}

/// Spectrum with at least one strictly positive intensity.
fn positive_spectrum() -> impl Strategy<Value = Spectrum> {
    prop::collection::vec((-1.0e3..1.0e3f64, 0.01..100.0f64), 1..80).prop_map(|pairs| {
        Spectrum::from_samples(pairs.into_iter().map(|(e, i)| Sample::new(e, i)).collect())
    })
}

fn params(fwhm: f64, shift: f64, max_energy: f64) -> TransformParams {
    TransformParams {
        fwhm,
        shift,
        max_energy,
        ..TransformParams::default()
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cleaning_keeps_exactly_the_numeric_rows(rows in prop::collection::vec(row(), 0..60)) {
        let text: String = rows.iter().map(|r| r.render() + "\n").collect();
        let valid = rows.iter().filter(|r| matches!(r, Row::Valid(..))).count();

        match parse_table(&text, IngestMode::TotalOnly) {
            Ok((sp, report)) => {
                prop_assert_eq!(sp.len(), valid);
                prop_assert_eq!(report.rows_read, rows.len());
                prop_assert_eq!(report.rows_dropped, rows.len() - valid);
            }
            Err(_) => prop_assert_eq!(valid, 0),
        }
    }

    #[test]
    fn loaded_energy_is_non_decreasing(rows in prop::collection::vec(row(), 1..60)) {
        let text: String = rows.iter().map(|r| r.render() + "\n").collect();
        if let Ok((sp, _)) = parse_table(&text, IngestMode::TotalOnly) {
            prop_assert!(sp.energy().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn shift_is_additive(
        sp in positive_spectrum(),
        shift in -500.0..500.0f64,
        fwhm in 0.1..20.0f64,
    ) {
        let base = pipeline::run(&sp, &params(fwhm, 0.0, f64::INFINITY)).unwrap();
        let moved = pipeline::run(&sp, &params(fwhm, shift, f64::INFINITY)).unwrap();
        prop_assert_eq!(base.len(), sp.len());
        prop_assert_eq!(moved.len(), sp.len());
        for (a, b) in base.shifted_energy.iter().zip(&moved.shifted_energy) {
            prop_assert!((a + shift - b).abs() <= 1e-9 * (1.0 + b.abs()));
        }
    }

    #[test]
    fn broadening_preserves_peak(sp in positive_spectrum(), fwhm in 0.1..50.0f64) {
        let out = pipeline::run(&sp, &params(fwhm, 0.0, f64::INFINITY)).unwrap();
        let original = peak(&out.intensity);
        let convolved = peak(&out.convolved);
        prop_assert!((original - convolved).abs() <= 1e-9 * original.abs());
    }

    #[test]
    fn cutoff_keeps_exactly_the_samples_below_it(
        sp in positive_spectrum(),
        shift in -100.0..100.0f64,
        max_energy in -1.2e3..1.2e3f64,
    ) {
        let all = pipeline::run(&sp, &params(1.0, shift, f64::INFINITY)).unwrap();
        let cut = pipeline::run(&sp, &params(1.0, shift, max_energy)).unwrap();

        prop_assert!(cut.shifted_energy.iter().all(|&e| e <= max_energy));
        let expected = all.shifted_energy.iter().filter(|&&e| e <= max_energy).count();
        prop_assert_eq!(cut.len(), expected);
        prop_assert_eq!(cut.intensity.len(), expected);
        prop_assert_eq!(cut.convolved.len(), expected);
        // Filtering selects a prefix of the sorted axis.
        prop_assert_eq!(&cut.convolved[..], &all.convolved[..expected]);
    }

    #[test]
    fn kernel_is_normalized(fwhm in 0.1..200.0f64) {
        let sum: f64 = kernel::gaussian_kernel(fwhm).iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sub_resolution_fwhm_is_identity(sp in positive_spectrum(), fwhm in 0.0001..0.1f64) {
        let (_, max) = sp.energy_range().unwrap();
        let out = pipeline::run(&sp, &params(fwhm, 0.0, max)).unwrap();
        prop_assert_eq!(&out.shifted_energy[..], sp.energy());
        prop_assert_eq!(&out.convolved, &out.intensity);
    }

    #[test]
    fn any_loaded_spectrum_transforms_or_reports_degenerate(sp in spectrum(1)) {
        match pipeline::run(&sp, &params(2.0, 0.0, f64::INFINITY)) {
            Ok(out) => prop_assert_eq!(out.len(), sp.len()),
            Err(e) => prop_assert_eq!(e, spectrum_broadener::PipelineError::DegenerateScale),
        }
    }
}
