//! Cell formats shared by all sheets.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

/// Number format for dates.
pub const DATE_FORMAT: &str = "yyyy-mm-dd";
/// Number format for dollar amounts.
pub const CURRENCY_FORMAT: &str = "\"$\"#,##0.00_-";
/// Number format for rates.
pub const PERCENT_FORMAT: &str = "0.00%";

/// Reusable formats.
#[derive(Debug, Clone)]
pub struct Formats {
    /// Table and label headers.
    pub header: Format,
    /// Sheet titles and labels.
    pub title: Format,
    /// Dates.
    pub date: Format,
    /// Dollar amounts.
    pub currency: Format,
    /// Annual rates.
    pub percent: Format,
    /// Whole months.
    pub integer: Format,
}

impl Default for Formats {
    fn default() -> Self {
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(0xEFEFEF)
            .set_border(FormatBorder::Thin)
            .set_border_color(0xCCCCCC);

        Self {
            header,
            title: Format::new().set_bold(),
            date: Format::new().set_num_format(DATE_FORMAT),
            currency: Format::new().set_num_format(CURRENCY_FORMAT),
            percent: Format::new().set_num_format(PERCENT_FORMAT),
            integer: Format::new().set_num_format("0"),
        }
    }
}
