/// Data layer: spectrum model, text ingestion, the store, and CSV export.
///
/// Architecture:
/// ```text
///  energy intensity [fc ht]   (whitespace table)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + drop bad rows → Spectrum (sorted)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SpectrumStore │  single current Spectrum, replaced wholesale
///   └──────────────┘
///        │
///        ▼   (pipeline::run)
///   ┌──────────┐
///   │  export   │  TransformResult → CSV
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod store;
