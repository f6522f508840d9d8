use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use sales_core::config::DEFAULT_SHEET_NAME;
use sales_core::{Result, SampleError};
use tracing::debug;

use crate::table::{CellValue, Table};

/// Highest row count a worksheet can hold, header included.
const MAX_ROWS: usize = 1_048_576;
/// Highest column count a worksheet can hold.
const MAX_COLUMNS: usize = 16_384;
/// Largest integer magnitude a numeric cell (an f64) stores exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Presentation options for the generated workbook. None of these change
/// the stored cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsxOptions {
    pub sheet_name: String,
    pub bold_header: bool,
    /// Display integer cells with a `#,##0` number format.
    pub thousands_separator: bool,
    pub autofit: bool,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            bold_header: true,
            thousands_separator: true,
            autofit: true,
        }
    }
}

/// Generate an XLSX workbook from a table: one sheet, header row of column
/// names, one row per table row, no index column.
///
/// Integer cells are stored as numbers and must lie within ±2^53;
/// anything larger is rejected as [`SampleError::InvalidTable`] rather
/// than silently rounded. Returns the raw bytes of the xlsx file.
pub fn generate_xlsx(table: &Table, options: &XlsxOptions) -> Result<Vec<u8>> {
    if table.row_count() + 1 > MAX_ROWS || table.column_count() > MAX_COLUMNS {
        return Err(SampleError::InvalidTable(format!(
            "{} rows x {} columns exceeds worksheet limits",
            table.row_count(),
            table.column_count()
        )));
    }
    check_integer_precision(table)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    let header_format = if options.bold_header {
        Format::new().set_bold()
    } else {
        Format::new()
    };
    let integer_format = if options.thousands_separator {
        Format::new().set_num_format("#,##0")
    } else {
        Format::new()
    };

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = col_idx as u16;
        worksheet.write_string_with_format(0, col, column.name(), &header_format)?;

        for (row_idx, value) in column.values().iter().enumerate() {
            let row = (row_idx + 1) as u32;
            match value {
                CellValue::Integer(n) => {
                    worksheet.write_number_with_format(row, col, *n as f64, &integer_format)?
                }
                CellValue::Text(s) => worksheet.write_string(row, col, s)?,
            };
        }
    }

    if options.autofit {
        worksheet.autofit();
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(
        "Encoded {} rows x {} columns into {} bytes",
        table.row_count(),
        table.column_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Encode `table` and write it to `path`, replacing any existing file.
///
/// The workbook is fully encoded before the file is opened, so a
/// serialization failure never truncates an existing file. Returns the
/// number of bytes written.
pub fn write_xlsx(table: &Table, options: &XlsxOptions, path: &Path) -> Result<usize> {
    let bytes = generate_xlsx(table, options)?;

    let file = File::create(path).map_err(|e| SampleError::file_system(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| SampleError::file_system(path, e))?;
    writer.flush().map_err(|e| SampleError::file_system(path, e))?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

fn check_integer_precision(table: &Table) -> Result<()> {
    for column in table.columns() {
        for (row_idx, value) in column.values().iter().enumerate() {
            if let CellValue::Integer(n) = value
                && n.unsigned_abs() > MAX_EXACT_INTEGER
            {
                return Err(SampleError::InvalidTable(format!(
                    "integer {n} in column '{}' row {row_idx} cannot be stored exactly",
                    column.name()
                )));
            }
        }
    }
    Ok(())
}
