use sales_core::Result;

use crate::table::{CellValue, Column, Table};

pub const PERIOD: &str = "period";
pub const REVENUE: &str = "revenue";
pub const PROFIT: &str = "profit";
pub const REGION: &str = "region";

/// Column order of the sample table, shared by the header row and the
/// in-memory keys.
pub const SALES_COLUMNS: [&str; 4] = [PERIOD, REVENUE, PROFIT, REGION];

const PERIODS: [&str; 3] = ["2024-01", "2024-02", "2024-03"];
const REGIONS: [&str; 3] = ["東京", "大阪", "名古屋"];
const REVENUES: [i64; 9] = [
    1_000_000, 1_200_000, 1_100_000, 800_000, 900_000, 850_000, 600_000, 700_000, 650_000,
];
const PROFITS: [i64; 9] = [
    200_000, 250_000, 220_000, 160_000, 180_000, 170_000, 120_000, 140_000, 130_000,
];

/// One month of sales for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    /// `YYYY-MM`
    pub period: String,
    pub revenue: i64,
    pub profit: i64,
    pub region: String,
}

impl SalesRecord {
    pub fn new(period: &str, revenue: i64, profit: i64, region: &str) -> Self {
        Self {
            period: period.to_string(),
            revenue,
            profit,
            region: region.to_string(),
        }
    }
}

/// The fixed nine-row dataset: each region in turn, three months apiece.
pub fn sample_sales_records() -> Vec<SalesRecord> {
    REGIONS
        .iter()
        .flat_map(|region| PERIODS.iter().map(move |period| (*period, *region)))
        .zip(REVENUES.iter().zip(PROFITS.iter()))
        .map(|((period, region), (revenue, profit))| {
            SalesRecord::new(period, *revenue, *profit, region)
        })
        .collect()
}

/// The fixed dataset laid out as a [`Table`].
pub fn sample_sales_table() -> Result<Table> {
    Table::from_records(&sample_sales_records())
}

impl Table {
    /// Lay sales records out column-wise in `period, revenue, profit, region` order.
    pub fn from_records(records: &[SalesRecord]) -> Result<Self> {
        let periods = records
            .iter()
            .map(|r| CellValue::from(r.period.as_str()))
            .collect();
        let revenues = records.iter().map(|r| CellValue::Integer(r.revenue)).collect();
        let profits = records.iter().map(|r| CellValue::Integer(r.profit)).collect();
        let regions = records
            .iter()
            .map(|r| CellValue::from(r.region.as_str()))
            .collect();

        Table::from_columns(vec![
            Column::new(PERIOD, periods),
            Column::new(REVENUE, revenues),
            Column::new(PROFIT, profits),
            Column::new(REGION, regions),
        ])
    }
}
