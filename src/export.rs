use std::fs;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, Workbook};

use crate::config::ScannerConfig;
use crate::errors::ExportError;
use crate::types::Entry;

pub const EXPORT_FILE_NAME: &str = "scan_data.xlsx";
pub const COLUMNS: [&str; 3] = ["id", "serialNumber", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

/// Rectangular table handed to a [`WorkbookWriter`]: a header plus one row per entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Serializes a row set into workbook bytes.
pub trait WorkbookWriter {
    /// # Errors
    ///
    /// Returns [`ExportError`] when the workbook cannot be produced.
    fn write(&self, sheet_title: &str, rows: &RowSet) -> Result<Vec<u8>, ExportError>;
}

pub fn build_rows(entries: &[Entry]) -> RowSet {
    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                Cell::Number(f64::from(entry.id)),
                Cell::Text(entry.serial_number.clone()),
                entry
                    .link
                    .as_ref()
                    .map_or(Cell::Empty, |link| Cell::Text(link.clone())),
            ]
        })
        .collect();

    RowSet {
        columns: COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        rows,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWorkbookWriter;

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write(&self, sheet_title: &str, rows: &RowSet) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_title)?;

        for (col, title) in (0u16..).zip(&rows.columns) {
            worksheet.write_string_with_format(0, col, title.as_str(), &header_format)?;
        }
        for (row, cells) in (1u32..).zip(&rows.rows) {
            for (col, cell) in (0u16..).zip(cells) {
                match cell {
                    Cell::Number(n) => {
                        worksheet.write_number(row, col, *n)?;
                    }
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text.as_str())?;
                    }
                    Cell::Empty => {}
                }
            }
        }
        worksheet.set_column_width(1, 24)?;
        worksheet.set_column_width(2, 48)?;

        Ok(workbook.save_to_buffer()?)
    }
}

/// Writes the entries to `<export_dir>/scan_data.xlsx` and returns that path.
/// The entries are only read.
///
/// # Errors
///
/// Returns [`ExportError`] if the writer fails or the file cannot be written.
pub fn export_to_dir(
    config: &ScannerConfig,
    entries: &[Entry],
    writer: &dyn WorkbookWriter,
) -> Result<PathBuf, ExportError> {
    let rows = build_rows(entries);
    let bytes = writer.write(&config.sheet_title, &rows)?;

    fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, bytes)?;

    tracing::info!(path = %path.display(), rows = rows.rows.len(), "exported scan data");
    Ok(path)
}
