//! Batch processing: file discovery and per-file row parsing for one pass.

use crate::error::RosterError;
use crate::export::RosterRecord;
use crate::parser::RowParser;
use crate::spreadsheet::Spreadsheet;
use crate::spreadsheet::Table;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// File extensions read as tabular input.
const RECOGNIZED_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "xls"];

/// Caller-supplied parameters for one processing pass over a directory.
pub struct PassConfig {
    pub directory: PathBuf,
    /// Enables the plan-number / SSN extraction for this pass.
    pub extract_identifiers: bool,
    /// Communication-channel label attached to every record of the pass.
    pub communication_type: String,
}

/// Outcome of parsing a single input file.
pub enum FileOutcome {
    Parsed(Vec<RosterRecord>),
    /// The configured name column lies outside the sheet; no rows were read.
    SkippedMissingColumn,
}

/// Lists the recognized tabular files in a directory, sorted for a
/// deterministic batch order. A directory that cannot be listed is an I/O
/// failure that fails the whole batch.
pub fn discover_files(directory: &Path) -> Result<Vec<PathBuf>, RosterError> {
    if !directory.is_dir() {
        return Err(RosterError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input directory '{}' not found", directory.display()),
        )));
    }

    let mut files = Vec::new();
    for extension in RECOGNIZED_EXTENSIONS {
        let pattern = directory.join(format!("*.{extension}"));
        for entry in glob::glob(&pattern.to_string_lossy())? {
            files.push(entry?);
        }
    }
    files.sort();
    Ok(files)
}

/// Processes every recognized file of one pass sequentially.
///
/// A file whose sheet lacks the name column is reported and skipped;
/// a missing directory or a file that cannot be opened or read fails the
/// whole batch.
///
/// # Arguments
/// * `pass` - Directory, identifier toggle, and channel label for the pass
/// * `parser` - The per-row parsing core
///
/// # Returns
/// Accepted records from every parsed file, in file order
pub fn process_pass(pass: &PassConfig, parser: &RowParser) -> Result<Vec<RosterRecord>, RosterError> {
    let files = discover_files(&pass.directory)?;
    info!(
        directory = %pass.directory.display(),
        files = files.len(),
        channel = %pass.communication_type,
        "processing pass"
    );

    let mut records = Vec::new();
    for path in files {
        let table = Spreadsheet::open(&path)?.first_sheet()?;
        match parse_table(&table, parser, pass) {
            FileOutcome::Parsed(mut parsed) => {
                debug!(file = %path.display(), records = parsed.len(), "parsed file");
                records.append(&mut parsed);
            }
            FileOutcome::SkippedMissingColumn => {
                warn!(
                    file = %path.display(),
                    column = parser.name_column(),
                    "name column not found; file skipped"
                );
            }
        }
    }
    Ok(records)
}

/// Parses every data row of one table, keeping only validated persons.
pub fn parse_table(table: &Table, parser: &RowParser, pass: &PassConfig) -> FileOutcome {
    if parser.name_column() >= table.column_count {
        return FileOutcome::SkippedMissingColumn;
    }

    let mut records = Vec::new();
    for row in &table.rows {
        let person = parser.parse(row, pass.extract_identifiers);
        if !parser.accepts(&person) {
            debug!(
                first = %person.first_name,
                last = %person.last_name,
                "rejected non-person row"
            );
            continue;
        }
        records.push(RosterRecord::new(person, &pass.communication_type));
    }
    FileOutcome::Parsed(records)
}
