//! Vibronic spectrum broadening.
//!
//! Load an `energy intensity [fc ht]` table into a [`SpectrumStore`], run the
//! [`pipeline`] with a set of [`TransformParams`], then draw or export the
//! [`TransformResult`].

pub mod data;
pub mod error;
pub mod pipeline;

pub use data::model::{IngestMode, Sample, Spectrum};
pub use data::store::SpectrumStore;
pub use error::{ExportError, IngestError, PipelineError};
pub use pipeline::{TransformParams, TransformResult};
