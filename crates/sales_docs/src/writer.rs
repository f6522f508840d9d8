use std::io::Write;
use std::path::PathBuf;

use sales_core::{GeneratorConfig, Result};
use tracing::info;

use crate::render::render_table;
use crate::sample::sample_sales_table;
use crate::xlsx::{XlsxOptions, write_xlsx};

/// Confirmation printed once the workbook is on disk.
pub const SUCCESS_MESSAGE: &str = "Excel file created successfully!";

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub bytes: usize,
}

/// Builds the sample sales table, writes it as a workbook and echoes it.
#[derive(Debug, Clone, Default)]
pub struct SampleDataWriter {
    config: GeneratorConfig,
}

impl SampleDataWriter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the table, write it to the configured path, then print the
    /// confirmation and the rendered table to `out`.
    ///
    /// Nothing is printed if the workbook could not be written.
    pub fn generate_and_write<W: Write>(&self, out: &mut W) -> Result<WriteReport> {
        let table = sample_sales_table()?;
        let options = XlsxOptions {
            sheet_name: self.config.sheet_name.clone(),
            ..XlsxOptions::default()
        };
        let path = &self.config.output_path;

        let bytes = write_xlsx(&table, &options, path)?;
        info!(
            "Wrote {} rows to {} ({bytes} bytes)",
            table.row_count(),
            path.display()
        );

        writeln!(out, "{SUCCESS_MESSAGE}")?;
        writeln!(out, "{}", render_table(&table))?;
        out.flush()?;

        Ok(WriteReport {
            path: path.clone(),
            rows: table.row_count(),
            columns: table.column_count(),
            bytes,
        })
    }
}

/// Write the sample workbook to `output_path` and print to stdout.
pub fn generate_and_write(output_path: impl Into<PathBuf>) -> Result<WriteReport> {
    let config = GeneratorConfig {
        output_path: output_path.into(),
        ..GeneratorConfig::default()
    };
    let stdout = std::io::stdout();
    SampleDataWriter::new(config).generate_and_write(&mut stdout.lock())
}
