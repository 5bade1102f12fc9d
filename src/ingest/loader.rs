//! CSV export loading
//!
//! Every `*.csv` file in a directory is one owner's export; the file stem is the
//! owner identity. Missing columns and empty cells deserialize as absent fields.

use super::record::{OwnerExport, RawContact};
use crate::graph::Identity;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Ingest errors
#[derive(Error, Debug)]
pub enum IngestError {
    /// Directory listing or file open failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read as CSV
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Load every `*.csv` export in `dir`, in file-name order.
pub fn load_directory(dir: impl AsRef<Path>) -> IngestResult<Vec<OwnerExport>> {
    let dir = dir.as_ref();
    info!("Loading contact exports from: {:?}", dir);

    let io_error = |source| IngestError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let exports = paths
        .iter()
        .map(|path| read_export(path))
        .collect::<IngestResult<Vec<_>>>()?;

    info!("Loaded {} export(s)", exports.len());
    Ok(exports)
}

/// Read a single export file. The owner is the file stem.
pub fn read_export(path: impl AsRef<Path>) -> IngestResult<OwnerExport> {
    let path = path.as_ref();
    let owner = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(file);

    let mut entries = Vec::new();
    for result in reader.deserialize::<RawContact>() {
        entries.push(result.map_err(csv_error)?);
    }

    debug!("Read {} row(s) for owner {}", entries.len(), owner);
    Ok(OwnerExport::new(Identity::from(owner), entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_read_export() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "alice.csv",
            "First Name,Last Name,Company,Position\nBob,Smith,Acme,Engineer\n Carol ,Jones,,\n",
        );

        let export = read_export(temp_dir.path().join("alice.csv")).unwrap();
        assert_eq!(export.owner, "alice");
        assert_eq!(export.entries.len(), 2);
        assert_eq!(export.entries[0].company.as_deref(), Some("Acme"));
        assert_eq!(export.entries[1].full_name(), "Carol Jones");
    }

    #[test]
    fn test_missing_columns() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "bob.csv", "First Name\nDana\n\"\"\n");

        let export = read_export(temp_dir.path().join("bob.csv")).unwrap();
        let names: Vec<String> = export
            .entries
            .iter()
            .map(|entry| entry.full_name().to_string())
            .collect();
        assert_eq!(names, vec!["Dana ", " "]);
    }

    #[test]
    fn test_load_directory_order_and_filter() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "zoe.csv", "First Name,Last Name\nA,B\n");
        write(temp_dir.path(), "adam.csv", "First Name,Last Name\nC,D\n");
        write(temp_dir.path(), "notes.txt", "ignored");

        let exports = load_directory(temp_dir.path()).unwrap();
        let owners: Vec<&str> = exports.iter().map(|e| e.owner.as_str()).collect();
        assert_eq!(owners, vec!["adam", "zoe"]);
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_directory(temp_dir.path().join("absent"));
        assert!(matches!(result, Err(IngestError::Io { .. })));
    }
}
