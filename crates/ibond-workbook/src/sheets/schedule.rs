use rust_xlsxwriter::{DataValidation, Formula, Worksheet};

use super::{new_sheet, write_header_row, BuildContext, SheetBuilder};
use crate::error::WorkbookResult;
use crate::formula::schedule::{
    composite_rate_column, month_column, month_index_column, resolved_field, resolved_months,
    value_column, variable_rate_column, ScheduleRefs,
};
use crate::layout::{names, schedule_cell, SCHEDULE_HEADERS, SCHEDULE_LABELS, SCHEDULE_SHEET};

/// Single-bond projection driven by the selector in `B1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleSheet;

impl SheetBuilder for ScheduleSheet {
    fn name(&self) -> &'static str {
        SCHEDULE_SHEET
    }

    fn build(&self, ctx: &BuildContext<'_>) -> WorkbookResult<Worksheet> {
        let mut worksheet = new_sheet(self.name())?;
        let formats = ctx.formats;
        let refs = ScheduleRefs::default();

        let (sel_row, sel_col) = schedule_cell::SELECTOR;
        worksheet.write_string_with_format(sel_row, 0, "Select Bond ID:", &formats.title)?;
        if let Some(first) = ctx.seed.portfolio.bonds().first() {
            worksheet.write_string(sel_row, sel_col, first.bond_id.as_str())?;
        }
        let selector = DataValidation::new()
            .allow_list_formula(Formula::new(format!("={}", names::BOND_IDS)));
        worksheet.add_data_validation(sel_row, sel_col, sel_row, sel_col, &selector)?;

        let resolved = [
            (resolved_field(&refs, names::BOND_ISSUE_DATES), &formats.date),
            (resolved_field(&refs, names::BOND_AMOUNTS), &formats.currency),
            (resolved_field(&refs, names::BOND_FIXED_RATES), &formats.percent),
            (resolved_months(&refs), &formats.integer),
        ];
        for ((row, label), (formula, format)) in
            (schedule_cell::FIRST_RESOLVED_ROW..).zip(SCHEDULE_LABELS).zip(resolved)
        {
            worksheet.write_string(row, 0, label)?;
            worksheet.write_dynamic_formula_with_format(row, sel_col, Formula::new(formula), format)?;
        }

        write_header_row(
            &mut worksheet,
            schedule_cell::HEADER_ROW,
            &SCHEDULE_HEADERS,
            &formats.header,
        )?;

        // Spilled cells take the column format, not the anchor's.
        let columns = [
            (month_column(&refs), &formats.date),
            (month_index_column(&refs), &formats.integer),
            (variable_rate_column(&refs), &formats.percent),
            (composite_rate_column(&refs), &formats.percent),
            (value_column(&refs), &formats.currency),
        ];
        for (col, (formula, format)) in (0u16..).zip(columns) {
            worksheet.set_column_format(col, format)?;
            worksheet.set_column_width(col, 16)?;
            worksheet.write_dynamic_formula_with_format(
                schedule_cell::SPILL_ROW,
                col,
                Formula::new(formula),
                format,
            )?;
        }

        tracing::debug!("schedule sheet written");
        Ok(worksheet)
    }
}
