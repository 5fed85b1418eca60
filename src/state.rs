use std::ops::RangeInclusive;
use std::path::Path;

use spectrum_broadener::data::export;
use spectrum_broadener::pipeline::{self, TransformParams, TransformResult};
use spectrum_broadener::{IngestMode, SpectrumStore};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Slider bounds
// ---------------------------------------------------------------------------

/// Input ranges for the parameter widgets, derived from the loaded data.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBounds {
    pub fwhm: RangeInclusive<f64>,
    pub max_energy: RangeInclusive<f64>,
    pub shift: RangeInclusive<f64>,
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            fwhm: 0.1..=200.0,
            max_energy: 0.0..=2000.0,
            shift: -1000.0..=1000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Current spectrum (empty until the user loads a file).
    pub store: SpectrumStore,

    /// Column layout used for the next load.
    pub mode: IngestMode,

    pub params: TransformParams,

    pub bounds: ParamBounds,

    /// Most recent successful pipeline output; what the plot draws.
    pub result: Option<TransformResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Load `path` with the current [`IngestMode`], reset the controls to the
    /// new data and recompute. The previous spectrum stays on failure.
    pub fn load_path(&mut self, path: &Path) {
        match self.store.load_file(path, self.mode) {
            Ok(report) => {
                // Curves of the previous spectrum must not outlive it.
                self.result = None;
                self.reset_controls();
                self.on_parameter_changed();
                if self.status_message.is_none() {
                    self.status_message = Some(StatusMessage::info(format!(
                        "Loaded {} samples ({} rows dropped)",
                        report.rows_kept, report.rows_dropped
                    )));
                }
            }
            Err(e) => {
                let e = anyhow::Error::new(e).context("Failed to load data");
                log::error!("{e:#}");
                self.status_message = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }

    /// Open dialog dismissed without a file.
    pub fn open_cancelled(&mut self) {
        log::info!("Open cancelled");
        self.status_message = Some(StatusMessage::info("No file selected."));
    }

    /// Reconfigure slider ranges and defaults from the loaded energy range.
    fn reset_controls(&mut self) {
        if let Some((lo, hi)) = self.store.energy_range() {
            let span = lo.abs().max(hi.abs());
            self.bounds.max_energy = lo..=hi;
            self.bounds.shift = -span..=span;
            self.params.max_energy = hi;
            self.params.shift = 0.0;
        }
        if !self.components_available() {
            self.params.show_fc = false;
            self.params.show_ht = false;
        }
    }

    /// Whether the FC/HT toggles apply to the loaded spectrum.
    pub fn components_available(&self) -> bool {
        self.store.current().has_components()
    }

    /// Re-run the pipeline with the current parameters.
    ///
    /// On failure the previously displayed result is kept.
    pub fn on_parameter_changed(&mut self) {
        match pipeline::run(self.store.current(), &self.params) {
            Ok(result) => {
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) if e.is_informational() => {
                self.status_message = Some(StatusMessage::info(e.to_string()));
            }
            Err(e) => {
                log::error!("Transform failed: {e}");
                self.status_message =
                    Some(StatusMessage::error(format!("Transform failed: {e}")));
            }
        }
    }

    /// Recompute with the current parameters and write the result to `path`.
    pub fn export_to(&mut self, path: &Path) {
        let result = match pipeline::run(self.store.current(), &self.params) {
            Ok(result) => result,
            Err(e) if e.is_informational() => {
                self.status_message =
                    Some(StatusMessage::info(format!("Nothing to save: {e}")));
                return;
            }
            Err(e) => {
                log::error!("Export aborted: {e}");
                self.status_message =
                    Some(StatusMessage::error(format!("Export aborted: {e}")));
                return;
            }
        };

        match export::export_file(path, &result) {
            Ok(()) => {
                self.status_message = Some(StatusMessage::info(format!(
                    "Saved {} rows to {}",
                    result.len(),
                    path.display()
                )));
            }
            Err(e) => {
                let e = anyhow::Error::new(e).context("Failed to save data");
                log::error!("{e:#}");
                self.status_message = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }
}
