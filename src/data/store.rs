use std::path::Path;

use super::loader::{self, LoadReport};
use super::model::{IngestMode, Spectrum};
use crate::error::IngestError;

/// Owner of the single current dataset.
///
/// A load either replaces the whole spectrum or leaves the previous one
/// untouched.
#[derive(Debug, Default)]
pub struct SpectrumStore {
    current: Spectrum,
}

impl SpectrumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and, on success, make it the current spectrum.
    pub fn load(&mut self, text: &str, mode: IngestMode) -> Result<LoadReport, IngestError> {
        let (spectrum, report) = loader::parse_table(text, mode)?;
        self.replace(spectrum);
        Ok(report)
    }

    /// Read `path` and, on success, make it the current spectrum.
    pub fn load_file(&mut self, path: &Path, mode: IngestMode) -> Result<LoadReport, IngestError> {
        let (spectrum, report) = loader::load_file(path, mode)?;
        log::info!(
            "Loaded {} samples from {} ({} rows dropped)",
            report.rows_kept,
            path.display(),
            report.rows_dropped
        );
        self.replace(spectrum);
        Ok(report)
    }

    pub fn replace(&mut self, spectrum: Spectrum) {
        self.current = spectrum;
    }

    pub fn current(&self) -> &Spectrum {
        &self.current
    }

    pub fn is_loaded(&self) -> bool {
        !self.current.is_empty()
    }

    /// Bounds the host uses to configure its energy and shift inputs.
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        self.current.energy_range()
    }
}
