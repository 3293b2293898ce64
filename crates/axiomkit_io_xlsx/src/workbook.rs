//! In-memory workbook model whose cells reference canonical styles.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axiomkit_xlsx_style::{AppendSource, Style, StyleRepository};
use log::debug;

use crate::spec::{EnumCellValue, SpecCell, SpecXlsxWriteOptions, XlsxWriteError};
use crate::util::{cast_col_num, cast_row_num, derive_unique_sheet_name, sanitize_sheet_name};

////////////////////////////////////////////////////////////////////////////////
// #region Workbook

/// Workbook owning one [`StyleRepository`] and its worksheets.
#[derive(Debug, Default)]
pub struct Workbook {
    repo: StyleRepository,
    l_worksheets: Vec<Worksheet>,
    set_sheet_names_existing: BTreeSet<String>,
    options: SpecXlsxWriteOptions,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SpecXlsxWriteOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SpecXlsxWriteOptions {
        &self.options
    }

    /// Add a worksheet; the name is sanitized and made unique.
    ///
    /// Returns the new sheet's index.
    pub fn add_worksheet(&mut self, name: &str) -> usize {
        let c_name = sanitize_sheet_name(
            name,
            &self.options.sheet_name_replace_to,
            &self.options.sheet_name_fallback,
        );
        let c_name = derive_unique_sheet_name(&mut self.set_sheet_names_existing, &c_name);
        debug!("added worksheet `{c_name}`");
        self.l_worksheets.push(Worksheet::new(c_name));
        self.l_worksheets.len() - 1
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.l_worksheets
    }

    pub fn worksheet(&self, idx: usize) -> Option<&Worksheet> {
        self.l_worksheets.get(idx)
    }

    pub fn style_repository(&self) -> &StyleRepository {
        &self.repo
    }

    pub fn style_repository_mut(&mut self) -> &mut StyleRepository {
        &mut self.repo
    }

    /// Borrow one worksheet together with the repository its styles live in.
    pub fn split_sheet_mut(
        &mut self,
        idx: usize,
    ) -> Result<(&mut Worksheet, &mut StyleRepository), XlsxWriteError> {
        let worksheet = self
            .l_worksheets
            .get_mut(idx)
            .ok_or(XlsxWriteError::SheetIndexOutOfRange(idx))?;
        Ok((worksheet, &mut self.repo))
    }

    /// Canonical handle for `style` in this workbook's repository.
    pub fn intern_style(&mut self, style: Style) -> Arc<Style> {
        self.repo.intern(style)
    }

    /// Shorthand for [`Worksheet::write_cell`] on sheet `idx`.
    pub fn write_cell(
        &mut self,
        idx: usize,
        row: usize,
        col: usize,
        value: impl Into<EnumCellValue>,
        style: Option<Style>,
    ) -> Result<(), XlsxWriteError> {
        let (worksheet, repo) = self.split_sheet_mut(idx)?;
        worksheet.write_cell(repo, row, col, value, style)
    }

    /// Shorthand for [`Worksheet::set_cell_style`] on sheet `idx`.
    pub fn set_cell_style(
        &mut self,
        idx: usize,
        row: usize,
        col: usize,
        style: Style,
    ) -> Result<Arc<Style>, XlsxWriteError> {
        let (worksheet, repo) = self.split_sheet_mut(idx)?;
        worksheet.set_cell_style(repo, row, col, style)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Worksheet

/// Sparse grid of cells keyed by zero-based `(row, col)`.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    dict_cells: BTreeMap<(u32, u16), SpecCell>,
}

impl Worksheet {
    fn new(name: String) -> Self {
        Self {
            name,
            dict_cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SpecCell> {
        let key = derive_cell_key(row, col).ok()?;
        self.dict_cells.get(&key)
    }

    /// Style handle of a cell, if any.
    pub fn cell_style(&self, row: usize, col: usize) -> Option<&Arc<Style>> {
        self.cell(row, col).and_then(|cell| cell.style.as_ref())
    }

    /// Cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((u32, u16), &SpecCell)> {
        self.dict_cells.iter().map(|(key, cell)| (*key, cell))
    }

    pub fn n_cells(&self) -> usize {
        self.dict_cells.len()
    }

    /// Write `value` and, when given, intern and attach `style`.
    ///
    /// With `style = None` the cell keeps any style it already has.
    pub fn write_cell(
        &mut self,
        repo: &mut StyleRepository,
        row: usize,
        col: usize,
        value: impl Into<EnumCellValue>,
        style: Option<Style>,
    ) -> Result<(), XlsxWriteError> {
        let key = derive_cell_key(row, col)?;
        let cell = self.dict_cells.entry(key).or_default();
        cell.value = value.into();
        if let Some(style) = style {
            cell.style = Some(repo.intern(style));
        }
        Ok(())
    }

    /// Intern `style` and attach the canonical handle to the cell.
    pub fn set_cell_style(
        &mut self,
        repo: &mut StyleRepository,
        row: usize,
        col: usize,
        style: Style,
    ) -> Result<Arc<Style>, XlsxWriteError> {
        let key = derive_cell_key(row, col)?;
        let style = repo.intern(style);
        self.dict_cells.entry(key).or_default().style = Some(Arc::clone(&style));
        Ok(style)
    }

    /// Derive the cell's new style from its current one plus `patch`.
    ///
    /// The current canonical style is never mutated; a copy with `patch`
    /// appended is interned instead.
    pub fn append_cell_style<S: AppendSource + ?Sized>(
        &mut self,
        repo: &mut StyleRepository,
        row: usize,
        col: usize,
        patch: &S,
    ) -> Result<Arc<Style>, XlsxWriteError> {
        let key = derive_cell_key(row, col)?;
        let cell = self.dict_cells.entry(key).or_default();
        let style = match &cell.style {
            Some(style_current) => style_current.merged(patch),
            None => Style::new().merged(patch),
        };
        let style = repo.intern(style);
        cell.style = Some(Arc::clone(&style));
        Ok(style)
    }

    /// Detach and return the cell's style handle.
    pub fn clear_cell_style(&mut self, row: usize, col: usize) -> Option<Arc<Style>> {
        let key = derive_cell_key(row, col).ok()?;
        self.dict_cells.get_mut(&key)?.style.take()
    }
}

fn derive_cell_key(row: usize, col: usize) -> Result<(u32, u16), XlsxWriteError> {
    Ok((cast_row_num(row)?, cast_col_num(col)?))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
