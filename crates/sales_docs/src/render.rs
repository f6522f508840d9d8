use crate::table::Table;

const COLUMN_GAP: &str = "  ";

/// Render a table as right-aligned text columns with a zero-based row
/// index on the left. The index is for display only.
///
/// Widths are measured in characters.
pub fn render_table(table: &Table) -> String {
    let index_labels: Vec<String> = (0..table.row_count()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = table
        .columns()
        .iter()
        .map(|c| c.values().iter().map(ToString::to_string).collect())
        .collect();
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .zip(&cells)
        .map(|(column, values)| {
            values
                .iter()
                .map(|v| v.chars().count())
                .chain(std::iter::once(column.name().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(table.row_count() + 1);

    let mut header = " ".repeat(index_width);
    for (column, width) in table.columns().iter().zip(widths.iter().copied()) {
        header.push_str(COLUMN_GAP);
        header.push_str(&format!("{:>width$}", column.name()));
    }
    lines.push(header);

    for (row_idx, label) in index_labels.iter().enumerate() {
        let mut line = format!("{label:<index_width$}");
        for (values, width) in cells.iter().zip(widths.iter().copied()) {
            line.push_str(COLUMN_GAP);
            line.push_str(&format!("{:>width$}", values[row_idx]));
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_sales_table;
    use crate::table::Column;

    #[test]
    fn test_render_sample_header_and_first_row() {
        let table = sample_sales_table().unwrap();
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    period  revenue  profit  region");
        assert_eq!(lines[1], "0  2024-01  1000000  200000      東京");
        assert_eq!(lines[7], "6  2024-01   600000  120000     名古屋");
    }

    #[test]
    fn test_render_indexes_every_row() {
        let table = sample_sales_table().unwrap();
        let text = render_table(&table);
        for (i, line) in text.lines().skip(1).enumerate() {
            assert!(line.starts_with(&format!("{i}  ")), "line {i}: {line}");
        }
    }

    #[test]
    fn test_render_contains_every_value() {
        let table = sample_sales_table().unwrap();
        let text = render_table(&table);
        for row in table.rows() {
            for cell in row {
                assert!(text.contains(&cell.to_string()), "missing {cell}");
            }
        }
    }

    #[test]
    fn test_render_widens_index_past_nine_rows() {
        let values = (0..12).map(|n: i64| n.into()).collect();
        let table = Table::from_columns(vec![Column::new("n", values)]).unwrap();
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "     n");
        assert_eq!(lines[1], "0    0");
        assert_eq!(lines[12], "11  11");
    }

    #[test]
    fn test_render_empty_table_has_header_only() {
        let table = Table::from_columns(vec![Column::new("x", Vec::new())]).unwrap();
        assert_eq!(render_table(&table), "  x");
    }
}
