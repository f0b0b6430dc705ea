use rust_xlsxwriter::{TableStyle, Worksheet};

use super::{new_sheet, table, write_date, write_decimal, BuildContext, DefinedName, SheetBuilder};
use crate::error::WorkbookResult;
use crate::layout::{names, rates_col, table_column, RATES_HEADERS, RATES_SHEET, RATES_TABLE};

/// The `tblRates` announcement table.
///
/// Seeded rows are written in ascending date order; the remaining rows up
/// to the table end are formatted blanks for the user to append to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatesSheet;

impl SheetBuilder for RatesSheet {
    fn name(&self) -> &'static str {
        RATES_SHEET
    }

    fn build(&self, ctx: &BuildContext<'_>) -> WorkbookResult<Worksheet> {
        let mut worksheet = new_sheet(self.name())?;
        let rates = &ctx.seed.rates;
        let last_row = ctx.layout.rates_last_row(rates.len());
        let formats = ctx.formats;

        for (row, record) in (1u32..).zip(rates.iter()) {
            write_date(
                &mut worksheet,
                row,
                rates_col::EFF_DATE,
                record.effective_date,
                &formats.date,
            )?;
            write_decimal(
                &mut worksheet,
                row,
                rates_col::VARIABLE_RATE,
                record.variable_rate,
                "variable_rate",
                &formats.percent,
            )?;
        }
        for row in (rates.len() as u32 + 1)..last_row {
            worksheet.write_blank(row, rates_col::EFF_DATE, &formats.date)?;
            worksheet.write_blank(row, rates_col::VARIABLE_RATE, &formats.percent)?;
        }

        let rates_table = table(
            RATES_TABLE,
            TableStyle::Medium2,
            &RATES_HEADERS,
            &formats.header,
        );
        worksheet.add_table(0, 0, last_row - 1, rates_col::VARIABLE_RATE, &rates_table)?;

        worksheet.set_column_width(rates_col::EFF_DATE, 12)?;
        worksheet.set_column_width(rates_col::VARIABLE_RATE, 14)?;

        tracing::debug!(seeded = rates.len(), last_row, "rates sheet written");
        Ok(worksheet)
    }

    fn defined_names(&self, _ctx: &BuildContext<'_>) -> Vec<DefinedName> {
        // Structured references, so rows appended below the seeded table
        // stay inside every rate lookup.
        [
            (names::RATE_DATES, rates_col::EFF_DATE),
            (names::RATE_VALUES, rates_col::VARIABLE_RATE),
        ]
        .into_iter()
        .map(|(name, col)| DefinedName {
            name,
            refers_to: table_column(RATES_TABLE, RATES_HEADERS[usize::from(col)]),
        })
        .collect()
    }
}
