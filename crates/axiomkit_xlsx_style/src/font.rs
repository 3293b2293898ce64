//! Font component.

use crate::component::{StyleComponent, impl_apply_non_default};
use crate::conf::{
    C_FONT_NAME_DEFAULT, N_FONT_COLOR_THEME_DEFAULT, N_FONT_SIZE_DEFAULT, N_FONT_SIZE_MAX,
    N_FONT_SIZE_MIN,
};
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::{FingerprintBuilder, FingerprintValue, impl_fingerprint_value_token, normalize_argb};

////////////////////////////////////////////////////////////////////////////////
// #region FontEnums

/// Underline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumUnderline {
    #[default]
    None,
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl EnumUnderline {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::SingleAccounting => "singleAccounting",
            Self::DoubleAccounting => "doubleAccounting",
        }
    }
}

/// Vertical text position (sub/superscript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumFontVerticalAlign {
    #[default]
    None,
    Subscript,
    Superscript,
}

impl EnumFontVerticalAlign {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
        }
    }
}

/// Font family classification (OOXML numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumFontFamily {
    NotApplicable,
    Roman,
    /// Sans-serif faces.
    #[default]
    Swiss,
    Modern,
    Script,
    Decorative,
}

impl EnumFontFamily {
    /// OOXML family number.
    pub const fn code(self) -> u8 {
        match self {
            Self::NotApplicable => 0,
            Self::Roman => 1,
            Self::Swiss => 2,
            Self::Modern => 3,
            Self::Script => 4,
            Self::Decorative => 5,
        }
    }
}

/// Theme font scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumFontScheme {
    /// Not part of the theme font scheme.
    None,
    /// Theme heading font.
    Major,
    /// Theme body font.
    #[default]
    Minor,
}

impl EnumFontScheme {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

/// Character set of the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumFontCharset {
    /// Not written; the application decides.
    #[default]
    ApplicationDefault,
    Ansi,
    Default,
    Symbols,
    Mac,
    ShiftJis,
    Hangul,
    Johab,
    Gbk,
    Big5,
    Greek,
    Turkish,
    Vietnamese,
    Hebrew,
    Arabic,
    Baltic,
    Russian,
    Thai,
    EasternEuropean,
    Oem,
}

impl EnumFontCharset {
    /// OOXML charset number, `None` for [`Self::ApplicationDefault`].
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::ApplicationDefault => None,
            Self::Ansi => Some(0),
            Self::Default => Some(1),
            Self::Symbols => Some(2),
            Self::Mac => Some(77),
            Self::ShiftJis => Some(128),
            Self::Hangul => Some(129),
            Self::Johab => Some(130),
            Self::Gbk => Some(134),
            Self::Big5 => Some(136),
            Self::Greek => Some(161),
            Self::Turkish => Some(162),
            Self::Vietnamese => Some(163),
            Self::Hebrew => Some(177),
            Self::Arabic => Some(178),
            Self::Baltic => Some(186),
            Self::Russian => Some(204),
            Self::Thai => Some(222),
            Self::EasternEuropean => Some(238),
            Self::Oem => Some(255),
        }
    }
}

/// Font color: a theme slot or an explicit ARGB value, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumFontColor {
    /// Theme color slot index.
    Theme(u32),
    /// Explicit ARGB value.
    Value(String),
}

impl Default for EnumFontColor {
    fn default() -> Self {
        Self::Theme(N_FONT_COLOR_THEME_DEFAULT)
    }
}

impl_fingerprint_value_token!(EnumUnderline, EnumFontVerticalAlign, EnumFontScheme);

impl FingerprintValue for EnumFontFamily {
    fn write_fingerprint(&self, out: &mut String) {
        self.code().write_fingerprint(out);
    }
}

impl FingerprintValue for EnumFontCharset {
    fn write_fingerprint(&self, out: &mut String) {
        self.code().write_fingerprint(out);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Font

/// Text font of a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub underline: EnumUnderline,
    pub vertical_align: EnumFontVerticalAlign,
    pub family: EnumFontFamily,
    pub scheme: EnumFontScheme,
    pub charset: EnumFontCharset,
    size: f64,
    color: EnumFontColor,
    name: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strike: false,
            underline: EnumUnderline::None,
            vertical_align: EnumFontVerticalAlign::None,
            family: EnumFontFamily::Swiss,
            scheme: EnumFontScheme::Minor,
            charset: EnumFontCharset::ApplicationDefault,
            size: N_FONT_SIZE_DEFAULT,
            color: EnumFontColor::default(),
            name: C_FONT_NAME_DEFAULT.to_string(),
        }
    }
}

impl Font {
    /// Size in points.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Font face name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color reference.
    pub fn color(&self) -> &EnumFontColor {
        &self.color
    }

    /// Set the size in points (`1..=409`).
    pub fn set_size(&mut self, size: f64) -> Result<(), StyleError> {
        if !size.is_finite() || !(N_FONT_SIZE_MIN..=N_FONT_SIZE_MAX).contains(&size) {
            return Err(StyleError::invalid_attribute(
                "size",
                size,
                format!("expected a size in {N_FONT_SIZE_MIN}..={N_FONT_SIZE_MAX} points"),
            ));
        }
        self.size = size;
        Ok(())
    }

    /// Set the face name; must not be blank.
    pub fn set_name(&mut self, name: &str) -> Result<(), StyleError> {
        if name.trim().is_empty() {
            return Err(StyleError::invalid_attribute(
                "name",
                name,
                "font name must not be empty",
            ));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Reference a theme color slot, dropping any explicit value.
    pub fn set_color_theme(&mut self, theme: u32) {
        self.color = EnumFontColor::Theme(theme);
    }

    /// Use an explicit ARGB color, dropping the theme reference.
    pub fn set_color_value(&mut self, color: &str) -> Result<(), StyleError> {
        self.color = EnumFontColor::Value(normalize_argb("font color", color)?);
        Ok(())
    }

    /// Theme slot, when the color is a theme reference.
    pub fn color_theme(&self) -> Option<u32> {
        match &self.color {
            EnumFontColor::Theme(theme) => Some(*theme),
            EnumFontColor::Value(_) => None,
        }
    }

    /// ARGB value, when the color is explicit.
    pub fn color_value(&self) -> Option<&str> {
        match &self.color {
            EnumFontColor::Theme(_) => None,
            EnumFontColor::Value(val) => Some(val),
        }
    }

    /// `true` when every attribute still has its default value.
    pub fn is_default_font(&self) -> bool {
        self.fingerprint() == Font::default().fingerprint()
    }
}

impl StyleComponent for Font {
    const KIND: EnumStyleComponentKind = EnumStyleComponentKind::Font;

    fn write_fingerprint(&self, fp: &mut FingerprintBuilder) {
        fp.push(&self.bold)
            .push(&self.italic)
            .push(&self.strike)
            .push(&self.underline)
            .push(&self.vertical_align)
            .push(&self.size)
            .push(&self.color_theme())
            .push(&self.color_value())
            .push(&self.name)
            .push(&self.family)
            .push(&self.scheme)
            .push(&self.charset);
    }

    impl_apply_non_default!(
        bold,
        italic,
        strike,
        underline,
        vertical_align,
        family,
        scheme,
        charset,
        size,
        color,
        name,
    );
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_fingerprint() {
        assert_eq!(
            Font::default().fingerprint(),
            "FNT0;0;0;none;none;11;1;#;Calibri;2;minor;#;"
        );
        assert!(Font::default().is_default_font());
    }

    #[test]
    fn test_font_color_is_exclusive() {
        let mut font = Font::default();
        font.set_color_value("FF0000FF").unwrap();
        assert_eq!(font.color_theme(), None);
        assert_eq!(font.color_value(), Some("FF0000FF"));

        font.set_color_theme(4);
        assert_eq!(font.color_theme(), Some(4));
        assert_eq!(font.color_value(), None);
    }

    #[test]
    fn test_font_setters_validate() {
        let mut font = Font::default();
        assert!(font.set_size(0.5).is_err());
        assert!(font.set_size(f64::NAN).is_err());
        assert!(font.set_name("  ").is_err());
        assert!(font.set_color_value("blue").is_err());
        assert!(font.is_default_font());

        font.set_size(14.5).unwrap();
        font.set_name("Arial").unwrap();
        assert_eq!(font.size(), 14.5);
        assert_eq!(font.name(), "Arial");
        assert!(!font.is_default_font());
    }

    #[test]
    fn test_overlay_keeps_target_bold_when_source_default() {
        let mut font_target = Font::default();
        font_target.bold = true;
        font_target.set_name("Arial").unwrap();

        let mut font_src = Font::default();
        font_src.underline = EnumUnderline::Double;

        font_target.overlay(&font_src);
        assert!(font_target.bold);
        assert_eq!(font_target.name(), "Arial");
        assert_eq!(font_target.underline, EnumUnderline::Double);
    }
}
