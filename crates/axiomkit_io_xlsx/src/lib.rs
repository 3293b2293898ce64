//! `axiomkit_io_xlsx` v1:
//! Workbook model and XLSX writer on top of `axiomkit_xlsx_style`.
//!
//! Module layout:
//! - `conf`     : constants and default options
//! - `spec`     : specs/models/options/errors
//! - `util`     : pure helper functions
//! - `workbook` : in-memory workbook whose cells hold canonical styles
//! - `writer`   : style-table planning and `rust_xlsxwriter` output
//! - `reader`   : style-table import into a repository
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod workbook;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_STYLE_TABLE_RESERVED,
    TUP_EXCEL_ILLEGAL, derive_default_xlsx_write_options,
};
pub use reader::import_style_table;
pub use spec::{
    EnumCellValue, SpecCell, SpecStyleTableEntry, SpecStyleTablePlan, SpecXlsxReport,
    SpecXlsxWriteOptions, XlsxWriteError,
};
pub use util::{derive_unique_sheet_name, sanitize_sheet_name};
pub use workbook::{Workbook, Worksheet};
pub use writer::{XlsxWriter, derive_rust_xlsx_format, plan_style_table, save_to_buffer};
