//! Append-only CSV ledger store
//!
//! One file, one header row, one CSV row per transaction. The store is
//! constructed with its path; there is no process-wide default. Records are
//! only ever appended and the whole file is re-read on every load.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};
use crate::models::Record;

/// Ledger file column header, in row order
pub const LEDGER_COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Append-only store backed by a single CSV file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the given ledger file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file exists
    pub fn is_initialized(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file with only the header row
    ///
    /// Idempotent: an existing file is left untouched, whatever it contains.
    pub fn initialize(&self) -> TallyResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        writer
            .write_record(LEDGER_COLUMNS)
            .and_then(|_| writer.flush().map_err(Into::into))
            .map_err(|e| {
                TallyError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        Ok(())
    }

    /// Append exactly one record to the end of the file
    ///
    /// The file is created first if this is the very first use. Failures
    /// surface as storage errors; nothing is retried or resumed.
    pub fn append(&self, record: &Record) -> TallyResult<()> {
        self.initialize()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .and_then(|_| writer.flush().map_err(Into::into))
            .map_err(|e| {
                TallyError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        Ok(())
    }

    /// Read every data row, in file order
    ///
    /// A missing file is initialized first and loads as an empty ledger.
    /// Any row that fails to parse aborts the whole load with
    /// [`TallyError::CorruptRecord`]; bad rows are never skipped.
    pub fn load_all(&self) -> TallyResult<Vec<Record>> {
        self.initialize()?;

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<Record>().enumerate() {
            let record = result.map_err(|e| TallyError::CorruptRecord {
                // Header occupies line 1
                line: e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(idx as u64 + 2),
                reason: match e.kind() {
                    csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
                    _ => e.to_string(),
                },
            })?;
            records.push(record);
        }

        Ok(records)
    }
}
