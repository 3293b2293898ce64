//! Style-table import used when loading an existing workbook.

use std::sync::Arc;

use axiomkit_xlsx_style::{SpecStyleParts, Style, StyleError, StyleRepository};
use log::debug;

/// Assemble and intern style-table records in table order.
///
/// Every record is assembled before anything is interned, so a record with a
/// missing component fails the whole import with
/// [`StyleError::MissingComponent`] and leaves `repo` untouched. Entry `i` of
/// the result is the canonical style of table index `i`.
pub fn import_style_table<I>(
    repo: &mut StyleRepository,
    records: I,
) -> Result<Vec<Arc<Style>>, StyleError>
where
    I: IntoIterator<Item = SpecStyleParts>,
{
    let l_styles = records
        .into_iter()
        .map(Style::try_from_parts)
        .collect::<Result<Vec<Style>, StyleError>>()?;
    let n_styles_before = repo.len();
    let l_handles = repo.intern_table(l_styles);
    debug!(
        "imported style table: {} record(s), {} new canonical style(s)",
        l_handles.len(),
        repo.len() - n_styles_before
    );
    Ok(l_handles)
}
