//! Spreadsheet input boundary.
//!
//! Wraps the calamine readers behind a unified interface that yields
//! column-indexed rows of [`CellValue`]s. Only the first worksheet of each
//! file is read; the first row is treated as a header fixing the column
//! count, never as data.

pub mod cell;

use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::cell::RawRow;
use calamine::open_workbook;
use calamine::Data;
use calamine::Range;
use calamine::Reader;
use calamine::Xls;
use calamine::XlsError;
use calamine::Xlsx;
use calamine::XlsxError;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors from opening and reading spreadsheet files.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Error in Excel 2007+ format (.xlsx, .xlsm)
    #[error("Invalid xlsx file format: {0}")]
    InvalidXlsxFileFormat(#[from] XlsxError),

    /// Error in legacy Excel format (.xls)
    #[error("Invalid xls file format: {0}")]
    InvalidXlsFileFormat(#[from] XlsError),

    /// Unsupported or unrecognized file format
    #[error("Cannot detect file format for '{name}'")]
    InvalidFileFormat { name: String },

    /// File contains no worksheets
    #[error("Sheet not found or spreadsheet is empty")]
    SheetNotFound,
}

/// Type alias for buffered file reader
pub type FileReader = BufReader<File>;

/// Wrapper enum over the supported spreadsheet format readers.
pub enum Spreadsheet {
    /// Excel 2007+ format reader (.xlsx, .xlsm)
    Xlsx(Xlsx<FileReader>),
    /// Legacy Excel format reader (.xls)
    Xls(Xls<FileReader>),
}

impl Spreadsheet {
    /// Opens a spreadsheet file, choosing the reader from the file extension.
    ///
    /// # Arguments
    /// * `path` - Path to the spreadsheet file
    ///
    /// # Returns
    /// Result containing the initialized reader, or an error for an
    /// unrecognized extension or an unreadable file
    pub fn open(path: &Path) -> Result<Spreadsheet, SpreadsheetError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => Ok(Spreadsheet::Xlsx(open_workbook(path)?)),
            Some("xls") => Ok(Spreadsheet::Xls(open_workbook(path)?)),
            _ => Err(SpreadsheetError::InvalidFileFormat {
                name: path.display().to_string(),
            }),
        }
    }

    /// Reads the first worksheet as a header-delimited table.
    ///
    /// The first row fixes the table's column count and is never returned
    /// as data.
    ///
    /// # Returns
    /// The worksheet's data rows, or an error when the file holds no
    /// worksheet at all
    pub fn first_sheet(&mut self) -> Result<Table, SpreadsheetError> {
        let range = match self {
            Spreadsheet::Xlsx(workbook) => workbook
                .worksheet_range_at(0)
                .ok_or(SpreadsheetError::SheetNotFound)??,
            Spreadsheet::Xls(workbook) => workbook
                .worksheet_range_at(0)
                .ok_or(SpreadsheetError::SheetNotFound)??,
        };
        Ok(Table::from_range(&range))
    }
}

/// Data rows of one worksheet, below its header row.
pub struct Table {
    /// Number of columns spanned by the sheet; fixed by the header row and
    /// stable across all rows.
    pub column_count: usize,
    /// Data rows in sheet order.
    pub rows: Vec<RawRow>,
}

impl Table {
    fn from_range(range: &Range<Data>) -> Table {
        Table {
            column_count: range.width(),
            rows: range
                .rows()
                .skip(1)
                .map(|cells| cells.iter().map(CellValue::from_data).collect())
                .collect(),
        }
    }
}
