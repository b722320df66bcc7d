use crate::config::ReportConfig;
use crate::ledger::{CashFlowReport, ClientStatement, InvoicePolicy};
use crate::utils::format_money;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
        }
    }
}

/// A plain-text table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = cells.get(idx).map(String::as_str).unwrap_or("");
                match column.alignment {
                    Alignment::Left => format!("{text:<width$}", width = widths[idx]),
                    Alignment::Right => format!("{text:>width$}", width = widths[idx]),
                }
            })
            .collect();
        rendered.join("  ").trim_end().to_string()
    }

    /// Renders the table with a header row and a separator rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header.clone())
            .collect();
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&self.render_cells(&headers, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(rule_width));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_cells(row, &widths));
        }
        out
    }
}

/// Renders the cash-flow report as a table. The invoiced column only appears
/// under the [`InvoicePolicy::TrackSeparately`] policy.
pub fn report_table(
    report: &CashFlowReport,
    config: &ReportConfig,
    policy: InvoicePolicy,
) -> String {
    let show_invoiced = policy == InvoicePolicy::TrackSeparately;
    let mut columns = vec![
        TableColumn::left("Date"),
        TableColumn::left("Voucher"),
        TableColumn::left("Type"),
        TableColumn::left("Party"),
        TableColumn::right("Received"),
        TableColumn::right("Paid"),
    ];
    if show_invoiced {
        columns.push(TableColumn::right("Invoiced"));
    }
    columns.push(TableColumn::right("Balance"));

    let decimals = config.decimal_places;
    let mut table = Table::new(columns);
    for row in &report.rows {
        let mut cells = vec![
            row.date.to_string(),
            row.voucher_no.clone().unwrap_or_default(),
            row.trans_type.code().to_string(),
            row.resolved_name.clone(),
            format_money(row.received, decimals),
            format_money(row.paid, decimals),
        ];
        if show_invoiced {
            cells.push(format_money(row.invoice_amt, decimals));
        }
        cells.push(format_money(row.balance, decimals));
        table.push_row(cells);
    }
    table.render()
}

/// Renders a client statement with debit/credit columns and Dr/Cr balances.
pub fn statement_table(statement: &ClientStatement, config: &ReportConfig) -> String {
    let decimals = config.decimal_places;
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Voucher"),
        TableColumn::left("Particulars"),
        TableColumn::right("Debit"),
        TableColumn::right("Credit"),
        TableColumn::right("Balance"),
    ]);
    for entry in &statement.entries {
        table.push_row(vec![
            entry.date.to_string(),
            entry.voucher_no.clone().unwrap_or_default(),
            entry.particulars.clone(),
            format_money(entry.debit, decimals),
            format_money(entry.credit, decimals),
            format!(
                "{} {}",
                format_money(entry.running_balance, decimals),
                entry.side
            ),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pad_to_the_widest_cell() {
        let mut table = Table::new(vec![TableColumn::left("Name"), TableColumn::right("Amt")]);
        table.push_row(vec!["ACME TRADING".into(), "10.000".into()]);
        table.push_row(vec!["BETA".into(), "5.000".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].chars().all(|ch| ch == '-'));
        assert!(lines[2].ends_with("10.000"));
        assert!(lines[3].ends_with(" 5.000"));
    }

    #[test]
    fn right_aligned_cells_line_up() {
        let mut table = Table::new(vec![TableColumn::right("Amt")]);
        table.push_row(vec!["5.000".into()]);
        table.push_row(vec!["1,234.000".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "    5.000");
        assert_eq!(lines[3], "1,234.000");
    }
}
