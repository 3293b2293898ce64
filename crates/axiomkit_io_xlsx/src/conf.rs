//! XLSX constants and default option factories.

use crate::spec::SpecXlsxWriteOptions;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Name used when a sanitized sheet name ends up empty.
pub const C_SHEET_NAME_FALLBACK: &str = "Sheet";

/// `cellXfs` entries written before the first repository style.
///
/// Entry 0 is the workbook default format.
pub const N_STYLE_TABLE_RESERVED: usize = 1;

/// `textRotation` angle rust_xlsxwriter uses for stacked vertical text.
pub const N_ROTATION_VERTICAL_XLSXWRITER: i16 = 270;

/// Build default write options.
pub fn derive_default_xlsx_write_options() -> SpecXlsxWriteOptions {
    SpecXlsxWriteOptions::default()
}
