use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::pipeline::TransformResult;

/// Header of the energy column.
pub const ENERGY_HEADER: &str = "ShiftedEnergy";

/// Write `result` as CSV to `path`, creating or truncating the file.
pub fn export_file(path: &Path, result: &TransformResult) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        origin: path.display().to_string(),
        source,
    })?;
    write_csv(file, result)?;
    log::info!("Exported {} rows to {}", result.len(), path.display());
    Ok(())
}

/// Write `result` as CSV:
///
/// ```text
/// ShiftedEnergy,TotalSpectrum,ConvolvedSpectrum[,IntensityFC][,IntensityHT]
/// ```
///
/// An empty result produces the header line only.
pub fn write_csv<W: Write>(writer: W, result: &TransformResult) -> Result<(), ExportError> {
    let series = result.series();
    let mut wtr = csv::Writer::from_writer(writer);

    let header: Vec<&str> = std::iter::once(ENERGY_HEADER)
        .chain(series.iter().map(|(s, _)| s.header()))
        .collect();
    wtr.write_record(&header)?;

    for (row, energy) in result.shifted_energy.iter().enumerate() {
        let record: Vec<String> = std::iter::once(*energy)
            .chain(series.iter().map(|(_, values)| values[row]))
            .map(|v| v.to_string())
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|source| ExportError::Io {
        origin: "CSV output".to_string(),
        source,
    })?;
    Ok(())
}
