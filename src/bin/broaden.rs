//! Headless broadening: load a table, run the pipeline once, write CSV.
//!
//! ```sh
//! broaden spectrum.txt --components --fwhm 4 --shift=-12 --show-fc -o out.csv
//! broaden spectrum.txt --params params.json -o out.csv
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use serde::Deserialize;

use spectrum_broadener::data::export;
use spectrum_broadener::pipeline::{self, TransformParams};
use spectrum_broadener::{IngestMode, SpectrumStore};

#[derive(Debug, Parser)]
#[command(
    name = "broaden",
    version,
    about = "Gaussian-broaden a vibronic spectrum and export it as CSV"
)]
struct Cli {
    /// Whitespace-delimited input table (no header).
    input: PathBuf,

    /// Destination CSV file.
    #[arg(short, long)]
    output: PathBuf,

    /// Read four columns: energy, total, FC, HT.
    #[arg(long)]
    components: bool,

    /// JSON file with transform parameters; flags override its values.
    #[arg(long)]
    params: Option<PathBuf>,

    #[command(flatten)]
    overrides: ParamArgs,
}

/// Transform parameters as given on the command line or in a params file.
/// Unset values fall back to the file, then to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Args, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParamArgs {
    /// Full width at half maximum of the Gaussian kernel.
    #[arg(long)]
    fwhm: Option<f64>,

    /// Energy offset added before convolution.
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<f64>,

    /// Inclusive cutoff on the shifted energy [default: maximum loaded energy].
    #[arg(long, allow_negative_numbers = true)]
    max_energy: Option<f64>,

    /// Include the Franck-Condon column.
    #[arg(long)]
    show_fc: bool,

    /// Include the Herzberg-Teller column.
    #[arg(long)]
    show_ht: bool,

    /// Column layout; params file only.
    #[arg(skip)]
    mode: Option<IngestMode>,
}

impl ParamArgs {
    /// Fill unset values in `self` from `fallback`.
    fn or(self, fallback: ParamArgs) -> ParamArgs {
        ParamArgs {
            fwhm: self.fwhm.or(fallback.fwhm),
            shift: self.shift.or(fallback.shift),
            max_energy: self.max_energy.or(fallback.max_energy),
            show_fc: self.show_fc || fallback.show_fc,
            show_ht: self.show_ht || fallback.show_ht,
            mode: self.mode.or(fallback.mode),
        }
    }

    fn resolve(&self, data_max_energy: f64) -> TransformParams {
        let defaults = TransformParams::default();
        TransformParams {
            fwhm: self.fwhm.unwrap_or(defaults.fwhm),
            shift: self.shift.unwrap_or(defaults.shift),
            max_energy: self.max_energy.unwrap_or(data_max_energy),
            show_fc: self.show_fc,
            show_ht: self.show_ht,
        }
    }
}

fn read_params_file(path: &Path) -> Result<ParamArgs> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading params file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing params file {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let from_file = match &cli.params {
        Some(path) => read_params_file(path)?,
        None => ParamArgs::default(),
    };
    let args = cli.overrides.clone().or(from_file);
    let mode = if cli.components {
        IngestMode::WithComponents
    } else {
        args.mode.unwrap_or_default()
    };

    let mut store = SpectrumStore::new();
    let report = store
        .load_file(&cli.input, mode)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    let (_, data_max) = store
        .energy_range()
        .context("loaded spectrum has no energy range")?;

    let params = args.resolve(data_max);
    log::debug!("resolved parameters: {params:?}");

    let result = pipeline::run(store.current(), &params).context("Transform failed")?;
    export::export_file(&cli.output, &result)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;

    println!(
        "{} -> {}: {} of {} samples written ({} dropped on load; fwhm {}, shift {}, max {})",
        cli.input.display(),
        cli.output.display(),
        result.len(),
        report.rows_kept,
        report.rows_dropped,
        params.fwhm,
        params.shift,
        params.max_energy,
    );
    Ok(())
}
