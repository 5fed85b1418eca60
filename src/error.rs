use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

/// Failure to turn a text source into a [`Spectrum`](crate::data::model::Spectrum).
///
/// Malformed individual rows are never reported here; they are dropped
/// during cleaning and only counted in the load report.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No row survived cleaning.
    #[error("no valid rows found ({rows_read} read, all dropped)")]
    Empty { rows_read: usize },

    /// The source could not be opened or decoded as text.
    #[error("cannot read {origin}")]
    Unreadable {
        origin: String,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Transform pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// Transform requested while nothing is loaded. Informational.
    #[error("no spectrum loaded")]
    NotLoaded,

    /// Peak of the convolved curve is zero, so it cannot be rescaled.
    #[error("convolved spectrum has a zero peak; cannot renormalize")]
    DegenerateScale,

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl PipelineError {
    /// Whether the host should show this as a notice rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, PipelineError::NotLoaded)
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {origin}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV writer failed")]
    Csv(#[from] csv::Error),
}
