use std::path::Path;

use super::model::{IngestMode, Sample, Spectrum};
use crate::error::IngestError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Row bookkeeping for one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Non-blank lines seen.
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Read a whitespace-delimited spectrum table from disk.
///
/// Expected layout (no header, positional):
///
/// ```text
/// 18250.0   0.0012   0.0010   0.0002
/// 18251.0   0.0015   0.0012   0.0003
/// ```
///
/// Only the first two columns are consumed in [`IngestMode::TotalOnly`].
pub fn load_file(path: &Path, mode: IngestMode) -> Result<(Spectrum, LoadReport), IngestError> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Unreadable {
        origin: path.display().to_string(),
        source,
    })?;
    parse_table(&text, mode)
}

/// Parse and clean an in-memory table.
///
/// A row is kept only if each of its first `mode.columns()` fields parses
/// to a finite number; otherwise the whole row is dropped. Fields beyond
/// that are ignored. Fails with [`IngestError::Empty`] if nothing survives.
pub fn parse_table(text: &str, mode: IngestMode) -> Result<(Spectrum, LoadReport), IngestError> {
    let mut report = LoadReport::default();
    let mut samples = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        report.rows_read += 1;

        match parse_row(line, mode) {
            Some(sample) => samples.push(sample),
            None => {
                log::debug!("dropping line {}: {:?}", line_no + 1, line.trim());
                report.rows_dropped += 1;
            }
        }
    }

    if samples.is_empty() {
        return Err(IngestError::Empty {
            rows_read: report.rows_read,
        });
    }
    report.rows_kept = samples.len();

    Ok((Spectrum::from_samples(samples), report))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(line: &str, mode: IngestMode) -> Option<Sample> {
    let mut fields = line.split_whitespace();
    let mut values = [0.0_f64; 4];
    for slot in values.iter_mut().take(mode.columns()) {
        *slot = parse_finite(fields.next()?)?;
    }

    let [energy, total, fc, ht] = values;
    Some(match mode {
        IngestMode::TotalOnly => Sample::new(energy, total),
        IngestMode::WithComponents => Sample::with_components(energy, total, fc, ht),
    })
}

/// `NaN` and `inf` parse as `f64` but are not valid samples.
fn parse_finite(tok: &str) -> Option<f64> {
    tok.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_rows_come_back_sorted() {
        let (sp, report) =
            parse_table("100 1.0\n110 0.5\n105 0.8\n", IngestMode::TotalOnly).unwrap();
        assert_eq!(sp.energy(), &[100.0, 105.0, 110.0]);
        assert_eq!(sp.total_intensity(), &[1.0, 0.8, 0.5]);
        assert_eq!(
            report,
            LoadReport {
                rows_read: 3,
                rows_kept: 3,
                rows_dropped: 0
            }
        );
    }

    #[test]
    fn bad_rows_are_dropped_whole() {
        let text = "\
1.0 2.0
abc 3.0
2.0
3.0 nan
4.0 inf
5.0 6.0 trailing junk
";
        let (sp, report) = parse_table(text, IngestMode::TotalOnly).unwrap();
        assert_eq!(sp.energy(), &[1.0, 5.0]);
        assert_eq!(sp.total_intensity(), &[2.0, 6.0]);
        assert_eq!(report.rows_read, 6);
        assert_eq!(report.rows_dropped, 4);
    }

    #[test]
    fn four_column_mode_requires_components() {
        let text = "1 2 3 4\n2 3 4\n3 4 5 x\n0\t1\t0.5\t0.5\n";
        let (sp, report) = parse_table(text, IngestMode::WithComponents).unwrap();
        assert_eq!(sp.energy(), &[0.0, 1.0]);
        assert_eq!(sp.intensity_fc(), Some(&[0.5, 3.0][..]));
        assert_eq!(sp.intensity_ht(), Some(&[0.5, 4.0][..]));
        assert_eq!(report.rows_dropped, 2);
    }

    #[test]
    fn two_column_mode_ignores_extra_columns() {
        let (sp, _) = parse_table("1 2 3 4\n", IngestMode::TotalOnly).unwrap();
        assert!(!sp.has_components());
        assert_eq!(sp.len(), 1);
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let (_, report) = parse_table("\n  \n1 2\n\n", IngestMode::TotalOnly).unwrap();
        assert_eq!(report.rows_read, 1);
        assert_eq!(report.rows_dropped, 0);
    }

    #[test]
    fn nothing_valid_is_empty_error() {
        let err = parse_table("Energy Intensity\nfoo bar\n", IngestMode::TotalOnly).unwrap_err();
        assert!(matches!(err, IngestError::Empty { rows_read: 2 }));

        let err = parse_table("", IngestMode::TotalOnly).unwrap_err();
        assert!(matches!(err, IngestError::Empty { rows_read: 0 }));
    }

    #[test]
    fn two_column_data_in_four_column_mode_is_empty() {
        let err = parse_table("1 2\n3 4\n", IngestMode::WithComponents).unwrap_err();
        assert!(matches!(err, IngestError::Empty { .. }));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.txt"), IngestMode::TotalOnly).unwrap_err();
        assert!(matches!(err, IngestError::Unreadable { .. }));
    }

    #[test]
    fn non_utf8_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.dat");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x31]).unwrap();
        let err = load_file(&path, IngestMode::TotalOnly).unwrap_err();
        assert!(matches!(err, IngestError::Unreadable { .. }));
    }
}
