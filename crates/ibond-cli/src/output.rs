//! Rendering of command results.
//!
//! Results go to stdout in the selected [`OutputFormat`]. Warnings go to
//! stderr so piped JSON or CSV stays clean.

use std::io;

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A named figure in a single-result report.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct Metric {
    #[tabled(rename = "Metric")]
    pub name: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Prints a list of records such as schedule lines or announcements.
///
/// `minimal` prints the last record, which is the projection end or the
/// latest announcement.
pub fn print_rows<T: Serialize + Tabled>(title: &str, rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_title(title);
            print_table(rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => write_csv(rows)?,
        OutputFormat::Minimal => {
            if let Some(last) = rows.last() {
                println!("{}", serde_json::to_string(last)?);
            }
        }
    }
    Ok(())
}

/// Prints a single-result report. JSON output is one object keyed by metric
/// name; `minimal` prints only the final metric, the headline figure.
pub fn print_metrics(title: &str, metrics: &[Metric], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_title(title);
            print_table(metrics);
        }
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = metrics
                .iter()
                .map(|m| (m.name.clone(), serde_json::Value::from(m.value.as_str())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        OutputFormat::Csv => write_csv(metrics)?,
        OutputFormat::Minimal => {
            if let Some(headline) = metrics.last() {
                println!("{}", headline.value);
            }
        }
    }
    Ok(())
}

fn print_title(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }
    let table = Table::new(rows)
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

fn write_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Two-decimal percentage of an annual rate, `0.049` as `4.90%`.
pub fn percent(rate: Decimal) -> String {
    format!("{:.2}%", rate * Decimal::ONE_HUNDRED)
}

/// Four-decimal percentage of a computed rate.
pub fn percent_f64(rate: f64) -> String {
    format!("{:.4}%", rate * 100.0)
}

pub fn dollars(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Confirms a completed action.
pub fn print_done(message: &str) {
    println!("{} {message}", "done:".green().bold());
}

/// Warns on stderr without failing the command.
pub fn print_caution(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_and_amount_text() {
        assert_eq!(percent(Decimal::new(49, 3)), "4.90%");
        assert_eq!(percent(Decimal::new(9, 3)), "0.90%");
        assert_eq!(percent(Decimal::ZERO), "0.00%");
        assert_eq!(percent_f64(0.058441), "5.8441%");
        assert_eq!(dollars(Decimal::new(105618, 2)), "$1056.18");
        assert_eq!(dollars(Decimal::new(1000, 0)), "$1000.00");
    }
}
