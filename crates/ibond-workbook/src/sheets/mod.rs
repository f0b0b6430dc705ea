//! Sheet builders.
//!
//! Each builder produces one standalone worksheet plus the workbook-level
//! names that point into it. The orchestrator runs them in dependency
//! order and inserts the results in tab order.

mod instructions;
mod inventory;
mod rates;
mod schedule;

pub use instructions::InstructionsSheet;
pub use inventory::InventorySheet;
pub use rates::RatesSheet;
pub use schedule::ScheduleSheet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{ExcelDateTime, Format, Table, TableColumn, TableStyle, Worksheet};

use ibond_core::Date;

use crate::error::{WorkbookError, WorkbookResult};
use crate::formats::Formats;
use crate::layout::WorkbookLayout;
use crate::seed::WorkbookSeed;

/// A workbook-level defined name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedName {
    /// Name as used in formulas.
    pub name: &'static str,
    /// Target range, with a leading `=`.
    pub refers_to: String,
}

/// Inputs shared by all builders.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    /// Table contents.
    pub seed: &'a WorkbookSeed,
    /// Row capacities.
    pub layout: &'a WorkbookLayout,
    /// Cell formats.
    pub formats: &'a Formats,
}

/// Builds one sheet of the tracker.
pub trait SheetBuilder {
    /// Tab name.
    fn name(&self) -> &'static str;

    /// Writes the sheet.
    fn build(&self, ctx: &BuildContext<'_>) -> WorkbookResult<Worksheet>;

    /// Names this sheet contributes to the workbook.
    fn defined_names(&self, _ctx: &BuildContext<'_>) -> Vec<DefinedName> {
        Vec::new()
    }
}

pub(crate) fn new_sheet(name: &str) -> WorkbookResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(name)?;
    Ok(worksheet)
}

pub(crate) fn table(name: &str, style: TableStyle, headers: &[&str], header: &Format) -> Table {
    let columns: Vec<TableColumn> = headers
        .iter()
        .map(|caption| TableColumn::new().set_header(*caption).set_header_format(header))
        .collect();
    Table::new()
        .set_name(name)
        .set_style(style)
        .set_columns(&columns)
}

pub(crate) fn write_header_row(
    worksheet: &mut Worksheet,
    row: u32,
    headers: &[&str],
    format: &Format,
) -> WorkbookResult<()> {
    for (col, caption) in (0u16..).zip(headers) {
        worksheet.write_string_with_format(row, col, *caption, format)?;
    }
    Ok(())
}

pub(crate) fn write_date(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    date: Date,
    format: &Format,
) -> WorkbookResult<()> {
    worksheet.write_datetime_with_format(row, col, &excel_date(date)?, format)?;
    Ok(())
}

pub(crate) fn write_decimal(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Decimal,
    field: &'static str,
    format: &Format,
) -> WorkbookResult<()> {
    let number = value.to_f64().ok_or_else(|| WorkbookError::InvalidCell {
        field,
        reason: format!("{value} is out of range"),
    })?;
    worksheet.write_number_with_format(row, col, number, format)?;
    Ok(())
}

fn excel_date(date: Date) -> WorkbookResult<ExcelDateTime> {
    let year = u16::try_from(date.year()).map_err(|_| WorkbookError::InvalidCell {
        field: "date",
        reason: format!("{date} is outside the spreadsheet date range"),
    })?;
    Ok(ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)?)
}
