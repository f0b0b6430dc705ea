use rust_xlsxwriter::{Formula, TableStyle, Worksheet};

use ibond_core::BondRecord;

use super::{new_sheet, table, write_date, write_decimal, BuildContext, DefinedName, SheetBuilder};
use crate::error::{WorkbookError, WorkbookResult};
use crate::formats::Formats;
use crate::formula::inventory::{current_value, months_held};
use crate::layout::{inventory_col as col, names, BONDS_TABLE, INVENTORY_HEADERS, INVENTORY_SHEET};

const COLUMN_WIDTHS: [(u16, u16); 8] = [
    (col::BOND_ID, 12),
    (col::OWNER, 18),
    (col::ISSUE_DATE, 12),
    (col::PURCHASE_AMOUNT, 16),
    (col::FIXED_RATE, 11),
    (col::MONTHS_TO_PROJECT, 17),
    (col::MONTHS_HELD, 12),
    (col::CURRENT_VALUE, 14),
];

/// The `tblBonds` inventory with derived MonthsHeld and CurrentValue.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventorySheet;

impl SheetBuilder for InventorySheet {
    fn name(&self) -> &'static str {
        INVENTORY_SHEET
    }

    fn build(&self, ctx: &BuildContext<'_>) -> WorkbookResult<Worksheet> {
        let bonds = ctx.seed.portfolio.bonds();
        let capacity = ctx.layout.inventory_rows;
        if bonds.len() > capacity as usize {
            return Err(WorkbookError::Capacity {
                sheet: INVENTORY_SHEET,
                capacity,
                requested: bonds.len(),
            });
        }

        let mut worksheet = new_sheet(self.name())?;
        let formats = ctx.formats;
        let last_row = ctx.layout.inventory_last_row();

        for row in 1..last_row {
            match bonds.get(row as usize - 1) {
                Some(bond) => write_bond(&mut worksheet, row, bond, formats)?,
                None => write_blank_inputs(&mut worksheet, row, formats)?,
            }
            // Formulas take one-based row numbers.
            worksheet.write_formula_with_format(
                row,
                col::MONTHS_HELD,
                Formula::new(months_held(row + 1)),
                &formats.integer,
            )?;
            worksheet.write_dynamic_formula_with_format(
                row,
                col::CURRENT_VALUE,
                Formula::new(current_value(row + 1)),
                &formats.currency,
            )?;
        }

        let bonds_table = table(
            BONDS_TABLE,
            TableStyle::Medium9,
            &INVENTORY_HEADERS,
            &formats.header,
        );
        worksheet.add_table(0, 0, last_row - 1, col::CURRENT_VALUE, &bonds_table)?;

        for (column, width) in COLUMN_WIDTHS {
            worksheet.set_column_width(column, width)?;
        }

        tracing::debug!(bonds = bonds.len(), capacity, "inventory sheet written");
        Ok(worksheet)
    }

    fn defined_names(&self, ctx: &BuildContext<'_>) -> Vec<DefinedName> {
        [
            (names::BOND_IDS, col::BOND_ID),
            (names::BOND_ISSUE_DATES, col::ISSUE_DATE),
            (names::BOND_AMOUNTS, col::PURCHASE_AMOUNT),
            (names::BOND_FIXED_RATES, col::FIXED_RATE),
            (names::BOND_MONTHS, col::MONTHS_TO_PROJECT),
        ]
        .into_iter()
        .map(|(name, column)| DefinedName {
            name,
            refers_to: ctx.layout.inventory_range(column),
        })
        .collect()
    }
}

fn write_bond(
    worksheet: &mut Worksheet,
    row: u32,
    bond: &BondRecord,
    formats: &Formats,
) -> WorkbookResult<()> {
    worksheet.write_string(row, col::BOND_ID, bond.bond_id.as_str())?;
    if !bond.owner.is_empty() {
        worksheet.write_string(row, col::OWNER, bond.owner.as_str())?;
    }

    match bond.issue_date {
        Some(date) => write_date(worksheet, row, col::ISSUE_DATE, date, &formats.date)?,
        None => {
            worksheet.write_blank(row, col::ISSUE_DATE, &formats.date)?;
        }
    }
    match bond.purchase_amount {
        Some(amount) => write_decimal(
            worksheet,
            row,
            col::PURCHASE_AMOUNT,
            amount,
            "purchase_amount",
            &formats.currency,
        )?,
        None => {
            worksheet.write_blank(row, col::PURCHASE_AMOUNT, &formats.currency)?;
        }
    }
    match bond.fixed_rate {
        Some(rate) => write_decimal(
            worksheet,
            row,
            col::FIXED_RATE,
            rate,
            "fixed_rate",
            &formats.percent,
        )?,
        None => {
            worksheet.write_blank(row, col::FIXED_RATE, &formats.percent)?;
        }
    }
    worksheet.write_number_with_format(
        row,
        col::MONTHS_TO_PROJECT,
        f64::from(bond.months_to_project),
        &formats.integer,
    )?;
    Ok(())
}

fn write_blank_inputs(worksheet: &mut Worksheet, row: u32, formats: &Formats) -> WorkbookResult<()> {
    worksheet.write_blank(row, col::ISSUE_DATE, &formats.date)?;
    worksheet.write_blank(row, col::PURCHASE_AMOUNT, &formats.currency)?;
    worksheet.write_blank(row, col::FIXED_RATE, &formats.percent)?;
    worksheet.write_blank(row, col::MONTHS_TO_PROJECT, &formats.integer)?;
    Ok(())
}
