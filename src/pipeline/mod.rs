//! Transform pipeline: shift, sort, broaden, renormalize, filter.
//!
//! ```text
//!   Spectrum + TransformParams
//!        │
//!        ▼
//!   shift energy ─► stable argsort ─► reorder every column
//!        │
//!        ▼
//!   kernel::gaussian_kernel(fwhm)
//!        │
//!        ▼
//!   convolve::convolve_same ─► rescale to original peak
//!        │
//!        ▼
//!   mask shifted <= max_energy ─► TransformResult
//! ```
//!
//! Stateless: every call recomputes everything from the spectrum.

pub mod convolve;
pub mod kernel;

use serde::{Deserialize, Serialize};

use crate::data::model::Spectrum;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Inputs of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Full width at half maximum of the broadening kernel.
    pub fwhm: f64,
    /// Added to every energy before convolution.
    pub shift: f64,
    /// Inclusive upper bound on the shifted energy axis.
    pub max_energy: f64,
    pub show_fc: bool,
    pub show_ht: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            fwhm: 1.0,
            shift: 0.0,
            max_energy: 1000.0,
            show_fc: false,
            show_ht: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Series – named output curves
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Original,
    Convolved,
    FranckCondon,
    HerzbergTeller,
}

impl Series {
    pub const ALL: [Series; 4] = [
        Series::Original,
        Series::Convolved,
        Series::FranckCondon,
        Series::HerzbergTeller,
    ];

    /// Column header used on export.
    pub fn header(self) -> &'static str {
        match self {
            Series::Original => "TotalSpectrum",
            Series::Convolved => "ConvolvedSpectrum",
            Series::FranckCondon => "IntensityFC",
            Series::HerzbergTeller => "IntensityHT",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Series::Original => "Original Spectrum",
            Series::Convolved => "Convolved Spectrum",
            Series::FranckCondon => "IntensityFC",
            Series::HerzbergTeller => "IntensityHT",
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Filtered, index-aligned curves, ascending in shifted energy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformResult {
    pub shifted_energy: Vec<f64>,
    pub intensity: Vec<f64>,
    pub convolved: Vec<f64>,
    pub intensity_fc: Option<Vec<f64>>,
    pub intensity_ht: Option<Vec<f64>>,
}

impl TransformResult {
    pub fn len(&self) -> usize {
        self.shifted_energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifted_energy.is_empty()
    }

    /// Intensity curves in export/legend order, skipping absent components.
    pub fn series(&self) -> Vec<(Series, &[f64])> {
        let mut out = vec![
            (Series::Original, self.intensity.as_slice()),
            (Series::Convolved, self.convolved.as_slice()),
        ];
        if let Some(fc) = &self.intensity_fc {
            out.push((Series::FranckCondon, fc.as_slice()));
        }
        if let Some(ht) = &self.intensity_ht {
            out.push((Series::HerzbergTeller, ht.as_slice()));
        }
        out
    }

    /// X-axis extent for display: `[min(shifted_energy), max_energy]`.
    pub fn x_range(&self, max_energy: f64) -> Option<(f64, f64)> {
        self.shifted_energy.first().map(|&lo| (lo, max_energy))
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full transform on `spectrum`.
pub fn run(
    spectrum: &Spectrum,
    params: &TransformParams,
) -> Result<TransformResult, PipelineError> {
    if spectrum.is_empty() {
        return Err(PipelineError::NotLoaded);
    }
    validate(params)?;

    let shifted: Vec<f64> = spectrum.energy().iter().map(|e| e + params.shift).collect();

    // A uniform shift keeps the order, but do not rely on the input being sorted.
    let order = argsort(&shifted);
    let shifted = permute(&shifted, &order);
    let intensity = permute(spectrum.total_intensity(), &order);

    let kernel = kernel::gaussian_kernel(params.fwhm);
    log::debug!("fwhm {} -> {}-point kernel", params.fwhm, kernel.len());
    let mut convolved = convolve::convolve_same(&intensity, &kernel);
    renormalize(&intensity, &mut convolved)?;

    let keep: Vec<usize> = (0..shifted.len())
        .filter(|&i| shifted[i] <= params.max_energy)
        .collect();
    let pick = |column: &[f64]| -> Vec<f64> { keep.iter().map(|&i| column[i]).collect() };

    let intensity_fc = component(params.show_fc, spectrum.intensity_fc(), "FC")
        .map(|c| pick(&permute(c, &order)));
    let intensity_ht = component(params.show_ht, spectrum.intensity_ht(), "HT")
        .map(|c| pick(&permute(c, &order)));

    Ok(TransformResult {
        shifted_energy: pick(&shifted),
        intensity: pick(&intensity),
        convolved: pick(&convolved),
        intensity_fc,
        intensity_ht,
    })
}

fn validate(params: &TransformParams) -> Result<(), PipelineError> {
    if !params.fwhm.is_finite() || params.fwhm <= 0.0 {
        return Err(PipelineError::InvalidParameter {
            name: "fwhm",
            value: params.fwhm,
        });
    }
    if !params.shift.is_finite() {
        return Err(PipelineError::InvalidParameter {
            name: "shift",
            value: params.shift,
        });
    }
    Ok(())
}

/// Scale `convolved` so its peak equals the peak of `original`.
fn renormalize(original: &[f64], convolved: &mut [f64]) -> Result<(), PipelineError> {
    let original_peak = peak(original);
    let convolved_peak = peak(convolved);
    if convolved_peak == 0.0 {
        return Err(PipelineError::DegenerateScale);
    }
    let scale = original_peak / convolved_peak;
    for v in convolved.iter_mut() {
        *v *= scale;
    }
    Ok(())
}

fn peak(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

fn component<'a>(requested: bool, column: Option<&'a [f64]>, name: &str) -> Option<&'a [f64]> {
    if !requested {
        return None;
    }
    if column.is_none() {
        log::warn!("{name} curve requested but the loaded spectrum has no {name} column");
    }
    column
}

/// Stable ascending argsort.
fn argsort(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}

fn permute(values: &[f64], order: &[usize]) -> Vec<f64> {
    order.iter().map(|&i| values[i]).collect()
}
