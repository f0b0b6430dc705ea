use rust_xlsxwriter::Worksheet;

use super::{new_sheet, BuildContext, SheetBuilder};
use crate::error::WorkbookResult;
use crate::layout::INSTRUCTIONS_SHEET;

const TITLE: &str = "I Bond Inventory & Monthly Value Tracker";

const LINES: &[&str] = &[
    "",
    "How to use:",
    "1) Fill the 'Rates' sheet with the May/November announcement dates and the published annual VARIABLE rate for each period.",
    "   - Effective dates look like 2024-05-01, 2024-11-01, and so on. Keep them in ascending order.",
    "   - Enter the variable rate as a decimal (0.0490 for 4.90%).",
    "2) Enter each bond in the 'Inventory' sheet:",
    "   - BondID: your identifier (must be unique)",
    "   - IssueDate: the bond's issue date (any day in the issue month is fine)",
    "   - PurchaseAmount: the amount you paid",
    "   - FixedRate: the fixed rate locked at issue (decimal)",
    "   - MonthsToProject: how many months the 'BondSchedule' view projects",
    "3) To view a monthly schedule for a bond:",
    "   - Go to 'BondSchedule' and choose a Bond ID from the dropdown in B1.",
    "   - Columns A-E spill one row per month with the applicable rate and value.",
    "",
    "Notes:",
    "- The workbook uses dynamic array functions (LET, SEQUENCE, SCAN, LAMBDA, XLOOKUP).",
    "  Use Excel 365 or Excel 2021 and later.",
    "- 'CurrentValue' in Inventory estimates the accrued value as of today with the same model.",
    "- Values are blank when an input is missing or no announcement covers a period.",
    "- The early redemption penalty is not applied. For bonds held under five years,",
    "  subtract roughly the last 3 months of interest.",
    "- Composite rate per period: fixed + variable + fixed*variable (all annual).",
    "  Value grows by (1 + composite/2) per six-month period and by its 6th root per month within one.",
];

/// Static usage notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionsSheet;

impl SheetBuilder for InstructionsSheet {
    fn name(&self) -> &'static str {
        INSTRUCTIONS_SHEET
    }

    fn build(&self, ctx: &BuildContext<'_>) -> WorkbookResult<Worksheet> {
        let mut worksheet = new_sheet(self.name())?;
        worksheet.write_string_with_format(0, 0, TITLE, &ctx.formats.title)?;
        for (row, line) in (1u32..).zip(LINES) {
            if !line.is_empty() {
                worksheet.write_string(row, 0, *line)?;
            }
        }
        worksheet.set_column_width(0, 110)?;
        Ok(worksheet)
    }
}
