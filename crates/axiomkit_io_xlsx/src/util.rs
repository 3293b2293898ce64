//! Stateless helper utilities used by the workbook layer and writer.

use std::collections::BTreeSet;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::XlsxWriteError;

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
///
/// Names that are empty after trimming become `fallback`.
pub fn sanitize_sheet_name(name: &str, replace_to: &str, fallback: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = fallback.to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Reserve `name` in `set_sheet_names_existing`, suffixing `__N` on collision.
pub fn derive_unique_sheet_name(set_sheet_names_existing: &mut BTreeSet<String>, name: &str) -> String {
    if !set_sheet_names_existing.contains(name) {
        set_sheet_names_existing.insert(name.to_string());
        return name.to_string();
    }

    let base_name: String = name
        .chars()
        .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
        .collect();

    let mut n_idx = 2usize;
    loop {
        let candidate: String = format!("{base_name}__{n_idx}")
            .chars()
            .take(N_LEN_EXCEL_SHEET_NAME_MAX)
            .collect();
        if !set_sheet_names_existing.contains(&candidate) {
            set_sheet_names_existing.insert(candidate.clone());
            return candidate;
        }
        n_idx += 1;
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellAddressing

/// Zero-based row index checked against the Excel row limit.
pub fn cast_row_num(value: usize) -> Result<u32, XlsxWriteError> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(XlsxWriteError::RowIndexOverflow(value));
    }
    u32::try_from(value).map_err(|_| XlsxWriteError::RowIndexOverflow(value))
}

/// Zero-based column index checked against the Excel column limit.
pub fn cast_col_num(value: usize) -> Result<u16, XlsxWriteError> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxWriteError::ColumnIndexOverflow(value));
    }
    u16::try_from(value).map_err(|_| XlsxWriteError::ColumnIndexOverflow(value))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
