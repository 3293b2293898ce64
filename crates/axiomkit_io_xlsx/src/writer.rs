//! XLSX writer kernel that emits a [`Workbook`] through `rust_xlsxwriter`.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use axiomkit_xlsx_style::util::split_argb;
use axiomkit_xlsx_style::{
    Border, CellAlignment, EnumBorderEdge as Edge, EnumBorderStyle, EnumFontColor, EnumFontScheme,
    EnumFontVerticalAlign, EnumFormatNumber, EnumHorizontalAlign, EnumPatternFill, EnumTextBreak,
    EnumTextDirection, EnumUnderline, EnumVerticalAlign, Fill, Font, NumberFormat, Style,
    StyleRepository,
};
use log::{debug, warn};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatDiagonalBorder, FormatPattern, FormatScript,
    FormatUnderline, Workbook as XlsxWorkbook, Worksheet as XlsxWorksheet,
};

use crate::conf::{N_ROTATION_VERTICAL_XLSXWRITER, N_STYLE_TABLE_RESERVED};
use crate::spec::{
    EnumCellValue, SpecStyleTableEntry, SpecStyleTablePlan, SpecXlsxReport, XlsxWriteError,
};
use crate::workbook::Workbook;

////////////////////////////////////////////////////////////////////////////////
// #region Writer

/// Stateful workbook writer bound to an output path.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    pub fn new(path_file_out: PathBuf) -> Self {
        Self {
            path_file_out,
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return immutable snapshot of per-save reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Render `workbook` and write it to the output path.
    pub fn save(&mut self, workbook: &Workbook) -> Result<SpecXlsxReport, XlsxWriteError> {
        if self.if_closed {
            return Err(XlsxWriteError::Closed);
        }
        let (mut xlsx_workbook, report) = render_workbook(workbook)?;
        xlsx_workbook.save(&self.path_file_out)?;
        self.l_reports.push(report.clone());
        Ok(report)
    }

    /// Refuse further saves. Idempotent.
    pub fn close(&mut self) {
        self.if_closed = true;
    }
}

/// Render `workbook` into an in-memory XLSX archive.
pub fn save_to_buffer(workbook: &Workbook) -> Result<Vec<u8>, XlsxWriteError> {
    let (mut xlsx_workbook, _) = render_workbook(workbook)?;
    Ok(xlsx_workbook.save_to_buffer()?)
}

fn render_workbook(workbook: &Workbook) -> Result<(XlsxWorkbook, SpecXlsxReport), XlsxWriteError> {
    let repo = workbook.style_repository();
    let layout = derive_style_table_layout(repo);
    let mut xlsx_workbook = XlsxWorkbook::new();
    // cellXfs indices follow registration order, so register before any cell.
    for (_, format) in &layout.l_formats {
        xlsx_workbook.register_format(format);
    }
    let dict_formats: BTreeMap<u32, Format> = layout.l_formats.into_iter().collect();
    debug!("style table registered with {} entries", layout.plan.len());

    let mut report = SpecXlsxReport {
        style_table: layout.plan,
        warnings: layout.warnings,
        ..Default::default()
    };

    for worksheet_src in workbook.worksheets() {
        let worksheet = xlsx_workbook.add_worksheet();
        worksheet.set_name(worksheet_src.name())?;

        for ((n_row, n_col), cell) in worksheet_src.iter_cells() {
            let format = match &cell.style {
                Some(style) => Some(select_cell_format(
                    repo,
                    &dict_formats,
                    style,
                    worksheet_src.name(),
                    n_row,
                    n_col,
                )?),
                None => None,
            };
            write_cell_with_format(worksheet, n_row, n_col, &cell.value, format)?;
            report.n_cells += 1;
        }
        report.sheets.push(worksheet_src.name().to_string());
    }

    if workbook.worksheets().is_empty() {
        report.warn("workbook has no worksheets; an empty default sheet is written");
        warn!("workbook has no worksheets; an empty default sheet is written");
    }
    Ok((xlsx_workbook, report))
}

fn select_cell_format<'a>(
    repo: &StyleRepository,
    dict_formats: &'a BTreeMap<u32, Format>,
    style: &Arc<Style>,
    sheet: &str,
    row: u32,
    col: u16,
) -> Result<&'a Format, XlsxWriteError> {
    let foreign = || XlsxWriteError::ForeignStyle {
        sheet: sheet.to_string(),
        row,
        col,
    };
    let order_id = style.order_id().ok_or_else(foreign)?;
    match repo.get_by_order_id(order_id) {
        Some(style_canonical) if Arc::ptr_eq(style_canonical, style) => {
            dict_formats.get(&order_id).ok_or_else(foreign)
        }
        _ => Err(foreign()),
    }
}

fn write_cell_with_format(
    worksheet: &mut XlsxWorksheet,
    row: u32,
    col: u16,
    value: &EnumCellValue,
    format: Option<&Format>,
) -> Result<(), XlsxWriteError> {
    match (value, format) {
        (EnumCellValue::None, Some(format)) => {
            worksheet.write_blank(row, col, format)?;
        }
        (EnumCellValue::None, None) => {}
        (EnumCellValue::String(val), Some(format)) => {
            worksheet.write_string_with_format(row, col, val, format)?;
        }
        (EnumCellValue::String(val), None) => {
            worksheet.write_string(row, col, val)?;
        }
        (EnumCellValue::Number(val), Some(format)) => {
            worksheet.write_number_with_format(row, col, *val, format)?;
        }
        (EnumCellValue::Number(val), None) => {
            worksheet.write_number(row, col, *val)?;
        }
        (EnumCellValue::Boolean(val), Some(format)) => {
            worksheet.write_boolean_with_format(row, col, *val, format)?;
        }
        (EnumCellValue::Boolean(val), None) => {
            worksheet.write_boolean(row, col, *val)?;
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StyleTable

/// Canonical formats in order-id order with the `cellXfs` slot each lands in.
struct SpecStyleTableLayout {
    plan: SpecStyleTablePlan,
    l_formats: Vec<(u32, Format)>,
    warnings: Vec<String>,
}

/// Assign each canonical style its `cellXfs` index.
///
/// Styles are registered in order-id order after the reserved default entry,
/// so indices follow [`StyleRepository::enumerate`]. A style whose format
/// equals an earlier one (or the default) shares that entry.
pub fn plan_style_table(repo: &StyleRepository) -> SpecStyleTablePlan {
    derive_style_table_layout(repo).plan
}

fn derive_style_table_layout(repo: &StyleRepository) -> SpecStyleTableLayout {
    let mut dict_format_indices: HashMap<Format, usize> = HashMap::from([(Format::new(), 0)]);
    debug_assert_eq!(dict_format_indices.len(), N_STYLE_TABLE_RESERVED);
    let c_fingerprint_default = Style::new().fingerprint_content();

    let mut entries = Vec::with_capacity(repo.len());
    let mut l_formats = Vec::with_capacity(repo.len());
    let mut warnings = Vec::new();
    for style in repo.iter() {
        let Some(order_id) = style.order_id() else {
            continue;
        };
        let format = derive_rust_xlsx_format(style);

        let l_unemitted = derive_unemitted_attributes(style);
        if !l_unemitted.is_empty() {
            let c_message = format!(
                "style order_id={order_id}: {} not written",
                l_unemitted.join(", ")
            );
            debug!("{c_message}");
            warnings.push(c_message);
        }

        let n_index_next = dict_format_indices.len();
        let index_table = match dict_format_indices.entry(format.clone()) {
            Entry::Occupied(entry) => {
                let index_table = *entry.get();
                if index_table != 0 || style.fingerprint_content() != c_fingerprint_default {
                    let c_message = format!(
                        "style order_id={order_id} shares cellXfs entry {index_table} with an equal format"
                    );
                    debug!("{c_message}");
                    warnings.push(c_message);
                }
                index_table
            }
            Entry::Vacant(entry) => {
                entry.insert(n_index_next);
                n_index_next
            }
        };

        entries.push(SpecStyleTableEntry {
            order_id,
            index_table,
            fingerprint: style.fingerprint(),
        });
        l_formats.push((order_id, format));
    }

    SpecStyleTableLayout {
        plan: SpecStyleTablePlan { entries },
        l_formats,
        warnings,
    }
}

/// Attributes of `style` that have no `rust_xlsxwriter` counterpart.
fn derive_unemitted_attributes(style: &Style) -> Vec<&'static str> {
    let mut l_unemitted = Vec::new();

    if let EnumFontColor::Value(argb) = style.font.color()
        && if_alpha_dropped(argb)
    {
        l_unemitted.push("font color alpha");
    }

    let fill_default = Fill::default();
    if style.fill.indexed_color() != fill_default.indexed_color() {
        l_unemitted.push("fill indexed color");
    }
    if style.fill.pattern_fill != EnumPatternFill::None
        && (if_alpha_dropped(style.fill.foreground_color())
            || if_alpha_dropped(style.fill.background_color()))
    {
        l_unemitted.push("fill color alpha");
    }

    let if_edge_alpha_dropped = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right, Edge::Diagonal]
        .into_iter()
        .filter(|edge| style.border.edge_style(*edge) != EnumBorderStyle::None)
        .filter_map(|edge| style.border.edge_color(edge))
        .any(if_alpha_dropped);
    if if_edge_alpha_dropped {
        l_unemitted.push("border color alpha");
    }

    let alignment = &style.cell_alignment;
    if alignment.text_direction == EnumTextDirection::Vertical && alignment.text_rotation() != 0 {
        l_unemitted.push("text rotation under vertical text");
    }
    if alignment.force_apply_alignment {
        l_unemitted.push("force_apply_alignment");
    }
    l_unemitted
}

fn if_alpha_dropped(argb: &str) -> bool {
    split_argb(argb).is_some_and(|(n_alpha, _)| n_alpha != 0xFF)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatMapping

/// Map every component of `style` onto a `rust_xlsxwriter` format.
pub fn derive_rust_xlsx_format(style: &Style) -> Format {
    let mut format = Format::new();
    format = apply_font(format, &style.font);
    format = apply_number_format(format, &style.number_format);
    format = apply_fill(format, &style.fill);
    format = apply_border(format, &style.border);
    apply_alignment(format, &style.cell_alignment)
}

fn apply_font(mut format: Format, font: &Font) -> Format {
    if font.is_default_font() {
        return format;
    }
    let font_default = Font::default();

    if font.name() != font_default.name() {
        format = format.set_font_name(font.name());
    }
    if font.size() != font_default.size() {
        format = format.set_font_size(font.size());
    }
    if font.bold {
        format = format.set_bold();
    }
    if font.italic {
        format = format.set_italic();
    }
    if font.strike {
        format = format.set_font_strikethrough();
    }
    if let Some(underline) = derive_format_underline(font.underline) {
        format = format.set_underline(underline);
    }
    match font.vertical_align {
        EnumFontVerticalAlign::Superscript => format = format.set_font_script(FormatScript::Superscript),
        EnumFontVerticalAlign::Subscript => format = format.set_font_script(FormatScript::Subscript),
        _ => {}
    }
    match font.color() {
        EnumFontColor::Value(argb) => {
            if let Some(color) = derive_format_color(argb) {
                format = format.set_font_color(color);
            }
        }
        EnumFontColor::Theme(theme) => {
            if font.color() != font_default.color()
                && let Ok(n_theme) = u8::try_from(*theme)
            {
                format = format.set_font_color(Color::Theme(n_theme, 0));
            }
        }
    }
    if font.family != font_default.family {
        format = format.set_font_family(font.family.code());
    }
    if let Some(n_charset) = font.charset.code() {
        format = format.set_font_charset(n_charset);
    }
    if font.scheme != font_default.scheme {
        let c_scheme = match font.scheme {
            EnumFontScheme::None => "",
            scheme => scheme.as_str(),
        };
        format = format.set_font_scheme(c_scheme);
    }
    format
}

fn apply_number_format(format: Format, number_format: &NumberFormat) -> Format {
    match number_format.number() {
        EnumFormatNumber::Builtin(0) => format,
        EnumFormatNumber::Builtin(id) => format.set_num_format_index(id),
        EnumFormatNumber::Custom => match number_format.custom_format_code() {
            Some(code) => format.set_num_format(code),
            None => format,
        },
    }
}

fn apply_fill(mut format: Format, fill: &Fill) -> Format {
    let Some(pattern) = derive_format_pattern(fill.pattern_fill) else {
        return format;
    };
    let fill_default = Fill::default();
    format = format.set_pattern(pattern);
    if fill.foreground_color() != fill_default.foreground_color()
        && let Some(color) = derive_format_color(fill.foreground_color())
    {
        format = format.set_foreground_color(color);
    }
    if fill.background_color() != fill_default.background_color()
        && let Some(color) = derive_format_color(fill.background_color())
    {
        format = format.set_background_color(color);
    }
    format
}

fn apply_border(mut format: Format, border: &Border) -> Format {
    if border.is_empty() {
        return format;
    }

    if border.top_style != EnumBorderStyle::None {
        format = format.set_border_top(derive_format_border(border.top_style));
        if let Some(color) = border.edge_color(Edge::Top).and_then(derive_format_color) {
            format = format.set_border_top_color(color);
        }
    }
    if border.bottom_style != EnumBorderStyle::None {
        format = format.set_border_bottom(derive_format_border(border.bottom_style));
        if let Some(color) = border.edge_color(Edge::Bottom).and_then(derive_format_color) {
            format = format.set_border_bottom_color(color);
        }
    }
    if border.left_style != EnumBorderStyle::None {
        format = format.set_border_left(derive_format_border(border.left_style));
        if let Some(color) = border.edge_color(Edge::Left).and_then(derive_format_color) {
            format = format.set_border_left_color(color);
        }
    }
    if border.right_style != EnumBorderStyle::None {
        format = format.set_border_right(derive_format_border(border.right_style));
        if let Some(color) = border.edge_color(Edge::Right).and_then(derive_format_color) {
            format = format.set_border_right_color(color);
        }
    }
    if border.diagonal_style != EnumBorderStyle::None {
        format = format.set_border_diagonal(derive_format_border(border.diagonal_style));
        if let Some(color) = border.edge_color(Edge::Diagonal).and_then(derive_format_color) {
            format = format.set_border_diagonal_color(color);
        }
        let diagonal_type = match (border.diagonal_up, border.diagonal_down) {
            (true, true) => Some(FormatDiagonalBorder::BorderUpDown),
            (true, false) => Some(FormatDiagonalBorder::BorderUp),
            (false, true) => Some(FormatDiagonalBorder::BorderDown),
            (false, false) => None,
        };
        if let Some(diagonal_type) = diagonal_type {
            format = format.set_border_diagonal_type(diagonal_type);
        }
    }
    format
}

fn apply_alignment(mut format: Format, alignment: &CellAlignment) -> Format {
    if let Some(align) = derive_format_align_horizontal(alignment.horizontal_align()) {
        format = format.set_align(align);
    }
    if let Some(align) = derive_format_align_vertical(alignment.vertical_align) {
        format = format.set_align(align);
    }
    if alignment.indent() > 0 {
        format = format.set_indent(alignment.indent());
    }
    match alignment.text_break {
        EnumTextBreak::WrapText => format = format.set_text_wrap(),
        EnumTextBreak::ShrinkToFit => format = format.set_shrink(),
        EnumTextBreak::None => {}
    }
    if alignment.text_direction == EnumTextDirection::Vertical {
        format = format.set_rotation(N_ROTATION_VERTICAL_XLSXWRITER);
    } else if alignment.text_rotation() != 0 {
        format = format.set_rotation(alignment.text_rotation());
    }
    if alignment.locked {
        format = format.set_locked();
    }
    if alignment.hidden {
        format = format.set_hidden();
    }
    format
}

fn derive_format_color(argb: &str) -> Option<Color> {
    split_argb(argb).map(|(_, n_rgb)| Color::RGB(n_rgb))
}

fn derive_format_underline(underline: EnumUnderline) -> Option<FormatUnderline> {
    match underline {
        EnumUnderline::None => None,
        EnumUnderline::Single => Some(FormatUnderline::Single),
        EnumUnderline::Double => Some(FormatUnderline::Double),
        EnumUnderline::SingleAccounting => Some(FormatUnderline::SingleAccounting),
        EnumUnderline::DoubleAccounting => Some(FormatUnderline::DoubleAccounting),
    }
}

fn derive_format_pattern(pattern: EnumPatternFill) -> Option<FormatPattern> {
    match pattern {
        EnumPatternFill::None => None,
        EnumPatternFill::Solid => Some(FormatPattern::Solid),
        EnumPatternFill::DarkGray => Some(FormatPattern::DarkGray),
        EnumPatternFill::MediumGray => Some(FormatPattern::MediumGray),
        EnumPatternFill::LightGray => Some(FormatPattern::LightGray),
        EnumPatternFill::Gray0625 => Some(FormatPattern::Gray0625),
        EnumPatternFill::Gray125 => Some(FormatPattern::Gray125),
    }
}

fn derive_format_border(border: EnumBorderStyle) -> FormatBorder {
    match border {
        EnumBorderStyle::None => FormatBorder::None,
        EnumBorderStyle::Hair => FormatBorder::Hair,
        EnumBorderStyle::Dotted => FormatBorder::Dotted,
        EnumBorderStyle::Dashed => FormatBorder::Dashed,
        EnumBorderStyle::DashDot => FormatBorder::DashDot,
        EnumBorderStyle::DashDotDot => FormatBorder::DashDotDot,
        EnumBorderStyle::SlantDashDot => FormatBorder::SlantDashDot,
        EnumBorderStyle::Thin => FormatBorder::Thin,
        EnumBorderStyle::Medium => FormatBorder::Medium,
        EnumBorderStyle::Thick => FormatBorder::Thick,
        EnumBorderStyle::Double => FormatBorder::Double,
        EnumBorderStyle::MediumDashed => FormatBorder::MediumDashed,
        EnumBorderStyle::MediumDashDot => FormatBorder::MediumDashDot,
        EnumBorderStyle::MediumDashDotDot => FormatBorder::MediumDashDotDot,
    }
}

fn derive_format_align_horizontal(align: EnumHorizontalAlign) -> Option<FormatAlign> {
    match align {
        EnumHorizontalAlign::None => None,
        EnumHorizontalAlign::General => Some(FormatAlign::General),
        EnumHorizontalAlign::Left => Some(FormatAlign::Left),
        EnumHorizontalAlign::Center => Some(FormatAlign::Center),
        EnumHorizontalAlign::Right => Some(FormatAlign::Right),
        EnumHorizontalAlign::Fill => Some(FormatAlign::Fill),
        EnumHorizontalAlign::Justify => Some(FormatAlign::Justify),
        EnumHorizontalAlign::CenterContinuous => Some(FormatAlign::CenterAcross),
        EnumHorizontalAlign::Distributed => Some(FormatAlign::Distributed),
    }
}

fn derive_format_align_vertical(align: EnumVerticalAlign) -> Option<FormatAlign> {
    match align {
        EnumVerticalAlign::None => None,
        EnumVerticalAlign::Top => Some(FormatAlign::Top),
        EnumVerticalAlign::Center => Some(FormatAlign::VerticalCenter),
        EnumVerticalAlign::Bottom => Some(FormatAlign::Bottom),
        EnumVerticalAlign::Justify => Some(FormatAlign::VerticalJustify),
        EnumVerticalAlign::Distributed => Some(FormatAlign::VerticalDistributed),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use axiomkit_xlsx_style::{
        EnumFillRole, EnumStylePreset, derive_colorized_background_style, derive_preset_style,
    };

    use super::*;

    #[test]
    fn test_plan_style_table_offsets_reserved_entries() {
        let mut repo = StyleRepository::new();
        let style_bold = repo.intern(derive_preset_style(EnumStylePreset::Bold));
        let style_date = repo.intern(derive_preset_style(EnumStylePreset::DateFormat));

        let plan = plan_style_table(&repo);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.index_of(0), Some(1));
        assert_eq!(plan.index_of(1), Some(2));
        assert_eq!(plan.entries[0].fingerprint, style_bold.fingerprint());
        assert_eq!(plan.entries[1].fingerprint, style_date.fingerprint());
        assert_eq!(plan.index_of(7), None);
    }

    #[test]
    fn test_plan_style_table_skips_removed_order_ids() {
        let mut repo = StyleRepository::new();
        let style_bold = repo.intern(derive_preset_style(EnumStylePreset::Bold));
        repo.intern(derive_preset_style(EnumStylePreset::Italic));
        repo.remove(style_bold).unwrap();

        let plan = plan_style_table(&repo);
        assert_eq!(plan.index_of(0), None);
        assert_eq!(plan.index_of(1), Some(1));
    }

    #[test]
    fn test_styles_with_equal_formats_share_one_entry() {
        let mut repo = StyleRepository::new();
        repo.intern(Style::new());
        repo.intern(derive_preset_style(EnumStylePreset::Bold));
        let mut style_forced = derive_preset_style(EnumStylePreset::Bold);
        style_forced.cell_alignment.force_apply_alignment = true;
        repo.intern(style_forced);
        repo.intern(derive_preset_style(EnumStylePreset::Italic));

        let layout = derive_style_table_layout(&repo);
        let l_indices: Vec<usize> = layout
            .plan
            .entries
            .iter()
            .map(|entry| entry.index_table)
            .collect();
        assert_eq!(l_indices, vec![0, 1, 1, 2]);
        assert_eq!(
            layout.warnings,
            vec![
                "style order_id=2: force_apply_alignment not written".to_string(),
                "style order_id=2 shares cellXfs entry 1 with an equal format".to_string(),
            ]
        );
    }

    #[test]
    fn test_unemitted_attributes_are_reported() {
        let mut style = Style::new();
        assert!(derive_unemitted_attributes(&style).is_empty());

        style.font.set_color_value("80FF0000").unwrap();
        style.fill.set_indexed_color(10).unwrap();
        style.fill.set_color("7F00FF00", EnumFillRole::FillColor).unwrap();
        style.border.top_style = EnumBorderStyle::Thin;
        style.border.set_edge_color(Edge::Top, Some("00000000")).unwrap();
        style.cell_alignment.text_direction = EnumTextDirection::Vertical;
        style.cell_alignment.set_text_rotation(30).unwrap();
        style.cell_alignment.force_apply_alignment = true;

        assert_eq!(
            derive_unemitted_attributes(&style),
            vec![
                "font color alpha",
                "fill indexed color",
                "fill color alpha",
                "border color alpha",
                "text rotation under vertical text",
                "force_apply_alignment",
            ]
        );
    }

    #[test]
    fn test_equal_styles_map_to_equal_formats() {
        let style_a = derive_preset_style(EnumStylePreset::BorderFrameHeader);
        let style_b = derive_preset_style(EnumStylePreset::BorderFrameHeader);
        assert_eq!(derive_rust_xlsx_format(&style_a), derive_rust_xlsx_format(&style_b));
        assert_eq!(derive_rust_xlsx_format(&Style::new()), Format::new());
    }

    #[test]
    fn test_format_mapping_covers_components() {
        let style = derive_colorized_background_style("FF00FF00").unwrap();
        let format_expected = Format::new()
            .set_pattern(FormatPattern::Solid)
            .set_foreground_color(Color::RGB(0x00FF00));
        assert_eq!(derive_rust_xlsx_format(&style), format_expected);

        let style = derive_preset_style(EnumStylePreset::DateFormat);
        assert_eq!(
            derive_rust_xlsx_format(&style),
            Format::new().set_num_format_index(14)
        );
    }

    #[test]
    fn test_foreign_style_handles_are_rejected() {
        let mut repo_other = StyleRepository::new();
        let style_foreign = repo_other.intern(derive_preset_style(EnumStylePreset::Bold));

        let mut repo = StyleRepository::new();
        let style_own = repo.intern(derive_preset_style(EnumStylePreset::Bold));
        let dict_formats: BTreeMap<u32, Format> =
            BTreeMap::from([(0, derive_rust_xlsx_format(&style_own))]);

        assert!(select_cell_format(&repo, &dict_formats, &style_own, "Data", 0, 0).is_ok());
        let err = select_cell_format(&repo, &dict_formats, &style_foreign, "Data", 3, 4)
            .unwrap_err();
        assert!(matches!(err, XlsxWriteError::ForeignStyle { row: 3, col: 4, .. }));
    }

    #[test]
    fn test_save_to_buffer_writes_archive() {
        let mut workbook = Workbook::new();
        let idx = workbook.add_worksheet("Data");
        workbook
            .write_cell(idx, 0, 0, "header", Some(derive_preset_style(EnumStylePreset::BorderFrameHeader)))
            .unwrap();
        workbook.write_cell(idx, 1, 0, 42.0, None).unwrap();
        workbook.write_cell(idx, 2, 0, true, None).unwrap();

        let v_bytes = save_to_buffer(&workbook).unwrap();
        assert!(v_bytes.starts_with(b"PK"));
    }
}
