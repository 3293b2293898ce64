//! Shared XLSX specification models.

use std::sync::Arc;

use axiomkit_xlsx_style::{Style, StyleError};
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::conf::C_SHEET_NAME_FALLBACK;

////////////////////////////////////////////////////////////////////////////////
// #region CellSpecification

/// Cell value held by a [`crate::workbook::Worksheet`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnumCellValue {
    /// Blank cell; only written when it carries a style.
    #[default]
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for EnumCellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// One worksheet cell: value plus an optional canonical style handle.
#[derive(Debug, Clone, Default)]
pub struct SpecCell {
    pub value: EnumCellValue,
    /// Interned style; `None` renders with the workbook default.
    pub style: Option<Arc<Style>>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Writer-wide options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Replacement for characters Excel rejects in sheet names.
    pub sheet_name_replace_to: String,
    /// Fallback for names that sanitize to nothing.
    pub sheet_name_fallback: String,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            sheet_name_replace_to: "_".to_string(),
            sheet_name_fallback: C_SHEET_NAME_FALLBACK.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StyleTableSpecification

/// Planned `cellXfs` slot of one canonical style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecStyleTableEntry {
    /// Repository order id.
    pub order_id: u32,
    /// Index in the emitted style table.
    pub index_table: usize,
    /// Full style fingerprint, order id included.
    pub fingerprint: String,
}

/// Style table as written: one entry per canonical style, in order-id order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecStyleTablePlan {
    pub entries: Vec<SpecStyleTableEntry>,
}

impl SpecStyleTablePlan {
    /// Table index of the style with `order_id`.
    pub fn index_of(&self, order_id: u32) -> Option<usize> {
        self.entries
            .binary_search_by_key(&order_id, |entry| entry.order_id)
            .ok()
            .map(|n_pos| self.entries[n_pos].index_table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-save report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Sheet names as written.
    pub sheets: Vec<String>,
    /// Number of cells written.
    pub n_cells: usize,
    /// Style table emitted for the workbook.
    pub style_table: SpecStyleTablePlan,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failure while building or writing a workbook.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("row index overflow: {0}")]
    RowIndexOverflow(usize),
    #[error("column index overflow: {0}")]
    ColumnIndexOverflow(usize),
    #[error("worksheet index out of range: {0}")]
    SheetIndexOutOfRange(usize),
    /// The cell's style handle does not belong to the workbook's repository.
    #[error("cell ({row}, {col}) of sheet `{sheet}` uses a style from another repository")]
    ForeignStyle { sheet: String, row: u32, col: u16 },
    #[error("Cannot write after close().")]
    Closed,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
