// Sample sales dataset: in-memory table, XLSX export, console rendering.

pub mod render;
pub mod sample;
pub mod table;
pub mod writer;
pub mod xlsx;

pub use sample::{SalesRecord, sample_sales_records, sample_sales_table};
pub use table::{CellValue, Column, Table};
pub use writer::{SUCCESS_MESSAGE, SampleDataWriter, WriteReport, generate_and_write};
pub use xlsx::{XlsxOptions, generate_xlsx, write_xlsx};
