//! Style constants and preset style factories.

use crate::alignment::{EnumHorizontalAlign, EnumVerticalAlign};
use crate::border::{EnumBorderEdge, EnumBorderStyle};
use crate::fill::{EnumFillRole, EnumPatternFill, Fill};
use crate::font::EnumUnderline;
use crate::number_format::NumberFormat;
use crate::spec::StyleError;
use crate::style::Style;

////////////////////////////////////////////////////////////////////////////////
// #region Constants

/// Separator written after every fingerprint attribute.
pub const C_FINGERPRINT_DELIMITER: char = ';';
/// Token for an unset attribute.
pub const C_FINGERPRINT_NULL: &str = "#";
/// Written instead of a string whose escaped form equals [`C_FINGERPRINT_NULL`].
pub const C_FINGERPRINT_NULL_ESCAPED: &str = "\\#\\";
/// Leading tag of a style fingerprint.
pub const C_STYLE_TAG: &str = "STY";

/// Default ARGB color (opaque black).
pub const C_COLOR_ARGB_DEFAULT: &str = "FF000000";
/// Indexed color meaning "not used".
pub const N_INDEXED_COLOR_UNSET: u8 = 64;
/// Largest accepted indexed color.
pub const N_INDEXED_COLOR_MAX: u8 = 64;

pub const C_FONT_NAME_DEFAULT: &str = "Calibri";
pub const N_FONT_SIZE_DEFAULT: f64 = 11.0;
pub const N_FONT_SIZE_MIN: f64 = 1.0;
pub const N_FONT_SIZE_MAX: f64 = 409.0;
/// Theme color slot of the default font (`tx1`).
pub const N_FONT_COLOR_THEME_DEFAULT: u32 = 1;

pub const N_INDENT_MAX: u8 = 64;
pub const N_TEXT_ROTATION_MIN: i16 = -90;
pub const N_TEXT_ROTATION_MAX: i16 = 90;

/// Reserved built-in number formats accepted by [`NumberFormat`].
///
/// Locale-dependent ids (5..=8, 23..=36, 41..=44) are excluded.
pub const L_BUILTIN_FORMAT_CODES: [(u8, &str); 28] = [
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Presets

/// Library-owned preset styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumStylePreset {
    Bold,
    Italic,
    BoldItalic,
    Underline,
    DoubleUnderline,
    Strike,
    /// Built-in date format 14.
    DateFormat,
    /// Built-in time format 21.
    TimeFormat,
    /// Built-in integer format 1.
    RoundFormat,
    /// Thin frame on the four outer edges.
    BorderFrame,
    /// Frame plus bold, centered text.
    BorderFrameHeader,
    /// `gray125` pattern fill.
    DottedFill0125,
    /// Centered both ways, as used for merged ranges.
    MergeCellStyle,
    Locked,
    Hidden,
}

impl EnumStylePreset {
    pub const ALL: [Self; 15] = [
        Self::Bold,
        Self::Italic,
        Self::BoldItalic,
        Self::Underline,
        Self::DoubleUnderline,
        Self::Strike,
        Self::DateFormat,
        Self::TimeFormat,
        Self::RoundFormat,
        Self::BorderFrame,
        Self::BorderFrameHeader,
        Self::DottedFill0125,
        Self::MergeCellStyle,
        Self::Locked,
        Self::Hidden,
    ];
}

/// Build the internal style of `preset`.
///
/// The result is marked internal; derive variants with
/// [`Style::copy_style`] or [`Style::merged`].
pub fn derive_preset_style(preset: EnumStylePreset) -> Style {
    let mut style = Style::new();
    match preset {
        EnumStylePreset::Bold => style.font.bold = true,
        EnumStylePreset::Italic => style.font.italic = true,
        EnumStylePreset::BoldItalic => {
            style.font.bold = true;
            style.font.italic = true;
        }
        EnumStylePreset::Underline => style.font.underline = EnumUnderline::Single,
        EnumStylePreset::DoubleUnderline => style.font.underline = EnumUnderline::Double,
        EnumStylePreset::Strike => style.font.strike = true,
        EnumStylePreset::DateFormat => style.number_format = NumberFormat::from_reserved(14),
        EnumStylePreset::TimeFormat => style.number_format = NumberFormat::from_reserved(21),
        EnumStylePreset::RoundFormat => style.number_format = NumberFormat::from_reserved(1),
        EnumStylePreset::BorderFrame => apply_border_frame(&mut style),
        EnumStylePreset::BorderFrameHeader => {
            apply_border_frame(&mut style);
            style.font.bold = true;
            style
                .cell_alignment
                .set_horizontal_align(EnumHorizontalAlign::Center);
            style.cell_alignment.vertical_align = EnumVerticalAlign::Center;
        }
        EnumStylePreset::DottedFill0125 => style.fill.pattern_fill = EnumPatternFill::Gray125,
        EnumStylePreset::MergeCellStyle => {
            style
                .cell_alignment
                .set_horizontal_align(EnumHorizontalAlign::Center);
            style.cell_alignment.vertical_align = EnumVerticalAlign::Center;
        }
        EnumStylePreset::Locked => style.cell_alignment.locked = true,
        EnumStylePreset::Hidden => style.cell_alignment.hidden = true,
    }
    style.mark_internal()
}

fn apply_border_frame(style: &mut Style) {
    for edge in [
        EnumBorderEdge::Top,
        EnumBorderEdge::Bottom,
        EnumBorderEdge::Left,
        EnumBorderEdge::Right,
    ] {
        style.border.set_edge_style(edge, EnumBorderStyle::Thin);
    }
}

/// Style whose only attribute is the font color `color` (ARGB).
pub fn derive_colorized_text_style(color: &str) -> Result<Style, StyleError> {
    let mut style = Style::new();
    style.font.set_color_value(color)?;
    Ok(style.mark_internal())
}

/// Style with a solid background of `color` (ARGB).
pub fn derive_colorized_background_style(color: &str) -> Result<Style, StyleError> {
    let mut style = Style::new();
    style.fill = Fill::from_color(color, EnumFillRole::FillColor)?;
    Ok(style.mark_internal())
}

/// Style with font `name` at `size` points, optionally bold.
pub fn derive_font_style(name: &str, size: f64, bold: bool) -> Result<Style, StyleError> {
    let mut style = Style::new();
    style.font.set_name(name)?;
    style.font.set_size(size)?;
    style.font.bold = bold;
    Ok(style.mark_internal())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{EnumFormatNumber, StyleRepository};

    #[test]
    fn test_presets_are_internal_and_distinct() {
        let set_fingerprints: HashSet<String> = EnumStylePreset::ALL
            .iter()
            .map(|preset| {
                let style = derive_preset_style(*preset);
                assert!(style.is_internal());
                style.fingerprint()
            })
            .collect();
        assert_eq!(set_fingerprints.len(), EnumStylePreset::ALL.len());
    }

    #[test]
    fn test_bold_with_date_format_scenario() {
        let style_bold = derive_preset_style(EnumStylePreset::Bold);
        let style_date = derive_preset_style(EnumStylePreset::DateFormat);
        let mut repo = StyleRepository::new();
        let style_bold = repo.intern(style_bold);

        let mut style_bold_date = style_bold.copy_style();
        style_bold_date.append(&style_date);
        assert!(style_bold_date.font.bold);
        assert_eq!(style_bold_date.number_format.number(), EnumFormatNumber::Builtin(14));

        let style_bold_date = repo.intern(style_bold_date);
        assert_eq!(style_bold_date.order_id(), Some(1));
        assert!(!style_bold.number_format.is_date_format());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_border_frame_header_combines_frame_and_bold() {
        let style = derive_preset_style(EnumStylePreset::BorderFrameHeader);
        let style_frame = derive_preset_style(EnumStylePreset::BorderFrame);
        assert_eq!(style.border, style_frame.border);
        assert!(style.font.bold);
        assert_eq!(
            style.cell_alignment.horizontal_align(),
            EnumHorizontalAlign::Center
        );
        assert_eq!(style_frame.border.edge_style(EnumBorderEdge::Diagonal), EnumBorderStyle::None);
    }

    #[test]
    fn test_parameterized_presets_validate_input() {
        let style = derive_colorized_text_style("ff0000ff").unwrap();
        assert_eq!(style.font.color_value(), Some("FF0000FF"));
        assert!(derive_colorized_text_style("blue").is_err());

        let style = derive_colorized_background_style("FFFFFF00").unwrap();
        assert_eq!(style.fill.foreground_color(), "FFFFFF00");
        assert_eq!(style.fill.pattern_fill, EnumPatternFill::Solid);

        let style = derive_font_style("Arial", 14.0, true).unwrap();
        assert_eq!(style.font.name(), "Arial");
        assert_eq!(style.font.size(), 14.0);
        assert!(style.font.bold);
        assert!(derive_font_style("Arial", 0.5, false).is_err());
    }

    #[test]
    fn test_builtin_table_ids_are_sorted_and_unique() {
        let l_ids: Vec<u8> = L_BUILTIN_FORMAT_CODES.iter().map(|(n_id, _)| *n_id).collect();
        let mut l_sorted = l_ids.clone();
        l_sorted.sort_unstable();
        l_sorted.dedup();
        assert_eq!(l_ids, l_sorted);
    }
}
