//! Plain-text rendering of pooled and summary tables.

use crate::core::result::{PooledResult, SummaryResult};
use std::fmt;

/// Format one cell: `NA` for NaN, `Inf`/`-Inf` for infinities, scientific
/// notation outside `[1e-4, 1e7)`.
pub(crate) fn format_value(x: f64) -> String {
    if x.is_nan() {
        "NA".to_string()
    } else if x.is_infinite() {
        (if x > 0.0 { "Inf" } else { "-Inf" }).to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else if x.abs() < 1e-4 || x.abs() >= 1e7 {
        format!("{:.4e}", x)
    } else {
        format!("{:.6}", x)
    }
}

/// Render rows as a column-aligned table. The first column is left-aligned,
/// the rest right-aligned.
fn write_table(f: &mut fmt::Formatter<'_>, header: &[&str], body: &[Vec<String>]) -> fmt::Result {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    write_row(f, header, &widths)?;
    for row in body {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(f, &cells, &widths)?;
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    for (j, (cell, w)) in cells.iter().zip(widths).enumerate() {
        if j == 0 {
            write!(f, "{:<w$}", cell, w = *w)?;
        } else {
            write!(f, " {:>w$}", cell, w = *w)?;
        }
    }
    writeln!(f)
}

impl fmt::Display for PooledResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pooled estimates (m = {})", self.m)?;
        let header = [
            "term", "m", "estimate", "ubar", "b", "t", "dfcom", "df", "riv", "lambda", "fmi",
        ];
        let body: Vec<Vec<String>> = self
            .terms
            .iter()
            .map(|r| {
                vec![
                    r.term.clone(),
                    self.m.to_string(),
                    format_value(r.qbar),
                    format_value(r.ubar),
                    format_value(r.b),
                    format_value(r.t),
                    format_value(r.dfcom),
                    format_value(r.df),
                    format_value(r.riv),
                    format_value(r.lambda),
                    format_value(r.fmi),
                ]
            })
            .collect();
        write_table(f, &header, &body)
    }
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec!["term"];
        header.extend(self.column_names());

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                let mut cells = vec![
                    r.term.clone(),
                    format_value(r.estimate),
                    format_value(r.std_error),
                ];
                if self.has_conf_int() {
                    cells.push(format_value(r.conf_low.unwrap_or(f64::NAN)));
                    cells.push(format_value(r.conf_high.unwrap_or(f64::NAN)));
                }
                cells.extend([
                    format_value(r.statistic),
                    format_value(r.df),
                    format_value(r.p_value),
                    format_value(r.riv),
                    format_value(r.lambda),
                    format_value(r.fmi),
                ]);
                cells
            })
            .collect();
        write_table(f, &header, &body)
    }
}
