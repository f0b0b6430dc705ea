//! Workbook assembly.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::WorkbookResult;
use crate::formats::Formats;
use crate::layout::{WorkbookLayout, TAB_ORDER};
use crate::seed::WorkbookSeed;
use crate::sheets::{
    BuildContext, DefinedName, InstructionsSheet, InventorySheet, RatesSheet, ScheduleSheet,
    SheetBuilder,
};

/// Builds the tracker workbook from seed data.
///
/// Sheets are generated in dependency order (Rates, Inventory,
/// BondSchedule, then Instructions) and placed in tab order (Instructions,
/// Inventory, Rates, BondSchedule).
#[derive(Debug, Clone)]
pub struct TrackerWorkbook {
    seed: WorkbookSeed,
    layout: WorkbookLayout,
    formats: Formats,
}

impl TrackerWorkbook {
    /// Creates a generator with the default layout.
    #[must_use]
    pub fn new(seed: WorkbookSeed) -> Self {
        Self {
            seed,
            layout: WorkbookLayout::default(),
            formats: Formats::default(),
        }
    }

    /// Overrides the row capacities.
    #[must_use]
    pub fn with_layout(mut self, layout: WorkbookLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Seed data.
    #[must_use]
    pub fn seed(&self) -> &WorkbookSeed {
        &self.seed
    }

    /// Row capacities.
    #[must_use]
    pub fn layout(&self) -> &WorkbookLayout {
        &self.layout
    }

    /// Assembles the in-memory workbook.
    pub fn build(&self) -> WorkbookResult<Workbook> {
        let ctx = BuildContext {
            seed: &self.seed,
            layout: &self.layout,
            formats: &self.formats,
        };
        let builders: [&dyn SheetBuilder; 4] =
            [&RatesSheet, &InventorySheet, &ScheduleSheet, &InstructionsSheet];

        let mut sheets: Vec<(&'static str, Worksheet)> = Vec::with_capacity(builders.len());
        let mut defined: Vec<DefinedName> = Vec::new();
        for builder in builders {
            sheets.push((builder.name(), builder.build(&ctx)?));
            defined.extend(builder.defined_names(&ctx));
        }

        sheets.sort_by_key(|(name, _)| TAB_ORDER.iter().position(|tab| tab == name));
        let mut workbook = Workbook::new();
        for (_, worksheet) in sheets {
            workbook.push_worksheet(worksheet);
        }
        for DefinedName { name, refers_to } in &defined {
            workbook.define_name(*name, refers_to)?;
        }

        tracing::debug!(
            rates = self.seed.rates.len(),
            bonds = self.seed.portfolio.len(),
            names = defined.len(),
            "workbook assembled"
        );
        Ok(workbook)
    }

    /// Writes the workbook to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> WorkbookResult<()> {
        let path = path.as_ref();
        let mut workbook = self.build()?;
        workbook.save(path)?;
        tracing::info!(path = %path.display(), "workbook saved");
        Ok(())
    }

    /// Serializes the workbook to `.xlsx` bytes.
    pub fn to_bytes(&self) -> WorkbookResult<Vec<u8>> {
        let mut workbook = self.build()?;
        Ok(workbook.save_to_buffer()?)
    }
}
