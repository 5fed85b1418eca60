use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// IngestMode – how many positional columns a source row must supply
// ---------------------------------------------------------------------------

/// Column layout of an input table. Chosen by the caller, never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestMode {
    /// `energy total_intensity`
    #[default]
    TotalOnly,
    /// `energy total_intensity intensity_fc intensity_ht`
    WithComponents,
}

impl IngestMode {
    /// Number of leading fields every kept row must parse.
    pub fn columns(self) -> usize {
        match self {
            IngestMode::TotalOnly => 2,
            IngestMode::WithComponents => 4,
        }
    }

    pub const ALL: [IngestMode; 2] = [IngestMode::TotalOnly, IngestMode::WithComponents];
}

impl fmt::Display for IngestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestMode::TotalOnly => write!(f, "2 columns (energy, total)"),
            IngestMode::WithComponents => write!(f, "4 columns (energy, total, FC, HT)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sample – one validated table row
// ---------------------------------------------------------------------------

/// Franck-Condon / Herzberg-Teller intensities of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub fc: f64,
    pub ht: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub energy: f64,
    pub total: f64,
    pub components: Option<Components>,
}

impl Sample {
    pub fn new(energy: f64, total: f64) -> Self {
        Sample {
            energy,
            total,
            components: None,
        }
    }

    pub fn with_components(energy: f64, total: f64, fc: f64, ht: f64) -> Self {
        Sample {
            energy,
            total,
            components: Some(Components { fc, ht }),
        }
    }
}

// ---------------------------------------------------------------------------
// Spectrum – the complete validated dataset, column oriented
// ---------------------------------------------------------------------------

/// Validated spectrum, sorted ascending by energy.
///
/// All present columns have the same length. The FC/HT columns exist only
/// when every sample carried them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    energy: Vec<f64>,
    total: Vec<f64>,
    intensity_fc: Option<Vec<f64>>,
    intensity_ht: Option<Vec<f64>>,
}

impl Spectrum {
    /// The "nothing loaded" spectrum.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a spectrum from samples, sorting them by energy.
    ///
    /// The sort is stable, so samples sharing an energy keep their source
    /// order.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.energy.total_cmp(&b.energy));

        let has_components =
            !samples.is_empty() && samples.iter().all(|s| s.components.is_some());

        let energy = samples.iter().map(|s| s.energy).collect();
        let total = samples.iter().map(|s| s.total).collect();
        let (intensity_fc, intensity_ht) = if has_components {
            let (fc, ht) = samples
                .iter()
                .filter_map(|s| s.components)
                .map(|c| (c.fc, c.ht))
                .unzip();
            (Some(fc), Some(ht))
        } else {
            (None, None)
        };

        Spectrum {
            energy,
            total,
            intensity_fc,
            intensity_ht,
        }
    }

    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn total_intensity(&self) -> &[f64] {
        &self.total
    }

    pub fn intensity_fc(&self) -> Option<&[f64]> {
        self.intensity_fc.as_deref()
    }

    pub fn intensity_ht(&self) -> Option<&[f64]> {
        self.intensity_ht.as_deref()
    }

    pub fn has_components(&self) -> bool {
        self.intensity_fc.is_some() && self.intensity_ht.is_some()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// `(min, max)` of the energy axis, or `None` when empty.
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        // Sorted on construction.
        Some((*self.energy.first()?, *self.energy.last()?))
    }
}
