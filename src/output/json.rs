//! On-disk JSON reports.
//!
//! A report is written as pretty-printed camelCase JSON. Reading one back
//! checks the schema's major version so stale files from an incompatible
//! layout are rejected up front instead of half-parsing.

use crate::parser::schema::SoundReport;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a report, creating missing parent directories
///
/// **Public** - used by the sounds command
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::WriteFailed` - I/O error while writing
/// * `OutputError::SerializationFailed` - report could not be encoded
pub fn write_report(report: &SoundReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = output_path.as_ref();
    check_target(path)?;
    ensure_parent(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    info!(
        "Saved report for {} ({} sounds) to {}",
        report.artist,
        report.sounds.len(),
        path.display()
    );
    Ok(())
}

/// Load a report written by [`write_report`]
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `OutputError::ReadFailed` - file missing or unreadable
/// * `OutputError::SerializationFailed` - not a report
/// * `OutputError::UnsupportedVersion` - major schema version differs
pub fn read_report(input_path: impl AsRef<Path>) -> Result<SoundReport, OutputError> {
    let path = input_path.as_ref();
    debug!("Loading report {}", path.display());

    let file = File::open(path).map_err(OutputError::ReadFailed)?;
    let report: SoundReport = serde_json::from_reader(BufReader::new(file))?;

    if major_version(&report.version) != major_version(REPORT_SCHEMA_VERSION) {
        return Err(OutputError::UnsupportedVersion {
            found: report.version,
            expected: REPORT_SCHEMA_VERSION.to_string(),
        });
    }

    debug!(
        "Report for {} holds {} sounds (schema {})",
        report.artist,
        report.sounds.len(),
        report.version
    );
    Ok(report)
}

fn check_target(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create {}: {}", parent.display(), e))
            })
        }
        _ => Ok(()),
    }
}

/// Leading component of a dotted version string
fn major_version(version: &str) -> &str {
    version.trim().split('.').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::ArtistSummary;
    use tempfile::{tempdir, NamedTempFile};

    fn report_with_version(version: &str) -> SoundReport {
        SoundReport {
            version: version.to_string(),
            artist: "bnyx".to_string(),
            display_name: "BNYX".to_string(),
            generated_at: "2025-01-01T00:00:00Z".to_string(),
            summary: ArtistSummary::default(),
            sounds: vec![],
        }
    }

    #[test]
    fn test_saved_report_loads_back() {
        let report = report_with_version(REPORT_SCHEMA_VERSION);
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.artist, "bnyx");
        assert_eq!(loaded.summary, report.summary);

        let raw = fs::read_to_string(temp_file.path()).unwrap();
        assert!(raw.ends_with("}\n"));
    }

    #[test]
    fn test_rejects_empty_and_directory_targets() {
        let dir = tempdir().unwrap();
        let report = report_with_version(REPORT_SCHEMA_VERSION);

        assert!(matches!(
            write_report(&report, ""),
            Err(OutputError::InvalidPath(_))
        ));
        assert!(matches!(
            write_report(&report, dir.path()),
            Err(OutputError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested/dirs/report.json");

        write_report(&report_with_version(REPORT_SCHEMA_VERSION), &nested).unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_report(dir.path().join("missing.json"));
        assert!(matches!(result, Err(OutputError::ReadFailed(_))));
    }

    #[test]
    fn test_read_rejects_other_major_version() {
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&report_with_version("2.0.0"), temp_file.path()).unwrap();

        match read_report(temp_file.path()) {
            Err(OutputError::UnsupportedVersion { found, expected }) => {
                assert_eq!(found, "2.0.0");
                assert_eq!(expected, REPORT_SCHEMA_VERSION);
            }
            other => panic!("expected version error, got {:?}", other.map(|r| r.version)),
        }
    }

    #[test]
    fn test_minor_version_bump_still_loads() {
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&report_with_version("1.4.2"), temp_file.path()).unwrap();

        assert_eq!(read_report(temp_file.path()).unwrap().version, "1.4.2");
    }

    #[test]
    fn test_read_non_report_json() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[1, 2, 3]").unwrap();

        assert!(matches!(
            read_report(temp_file.path()),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
