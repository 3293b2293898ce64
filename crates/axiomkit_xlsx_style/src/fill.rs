//! Cell fill component.

use crate::component::{StyleComponent, impl_apply_non_default};
use crate::conf::{C_COLOR_ARGB_DEFAULT, N_INDEXED_COLOR_MAX, N_INDEXED_COLOR_UNSET};
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::{FingerprintBuilder, impl_fingerprint_value_token, normalize_argb, validate_range};

/// Fill pattern (subset of OOXML `ST_PatternType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumPatternFill {
    /// No fill.
    #[default]
    None,
    /// Solid foreground color.
    Solid,
    DarkGray,
    MediumGray,
    LightGray,
    Gray0625,
    Gray125,
}

impl EnumPatternFill {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::DarkGray => "darkGray",
            Self::MediumGray => "mediumGray",
            Self::LightGray => "lightGray",
            Self::Gray0625 => "gray0625",
            Self::Gray125 => "gray125",
        }
    }
}

impl_fingerprint_value_token!(EnumPatternFill);

/// Which color slot [`Fill::set_color`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFillRole {
    /// Cell fill color (foreground of a solid pattern).
    FillColor,
    /// Pattern color (background slot).
    PatternColor,
}

/// Cell background fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    foreground_color: String,
    background_color: String,
    indexed_color: u8,
    /// Fill pattern.
    pub pattern_fill: EnumPatternFill,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            foreground_color: C_COLOR_ARGB_DEFAULT.to_string(),
            background_color: C_COLOR_ARGB_DEFAULT.to_string(),
            indexed_color: N_INDEXED_COLOR_UNSET,
            pattern_fill: EnumPatternFill::None,
        }
    }
}

impl Fill {
    /// Solid fill with `color` in the slot selected by `role`.
    pub fn from_color(color: &str, role: EnumFillRole) -> Result<Self, StyleError> {
        let mut fill = Self::default();
        fill.set_color(color, role)?;
        Ok(fill)
    }

    /// Foreground ARGB color.
    pub fn foreground_color(&self) -> &str {
        &self.foreground_color
    }

    /// Background ARGB color.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Indexed color; [`N_INDEXED_COLOR_UNSET`] when not used.
    pub fn indexed_color(&self) -> u8 {
        self.indexed_color
    }

    pub fn set_foreground_color(&mut self, color: &str) -> Result<(), StyleError> {
        self.foreground_color = normalize_argb("foreground_color", color)?;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), StyleError> {
        self.background_color = normalize_argb("background_color", color)?;
        Ok(())
    }

    /// Set the indexed color (`0..=64`, 64 meaning unset).
    pub fn set_indexed_color(&mut self, index: u8) -> Result<(), StyleError> {
        self.indexed_color = validate_range("indexed_color", index, 0, N_INDEXED_COLOR_MAX)?;
        Ok(())
    }

    /// Write `color` to the slot of `role`, reset the other slot and force a
    /// solid pattern.
    pub fn set_color(&mut self, color: &str, role: EnumFillRole) -> Result<(), StyleError> {
        let color = normalize_argb("fill color", color)?;
        match role {
            EnumFillRole::FillColor => {
                self.foreground_color = color;
                self.background_color = C_COLOR_ARGB_DEFAULT.to_string();
            }
            EnumFillRole::PatternColor => {
                self.foreground_color = C_COLOR_ARGB_DEFAULT.to_string();
                self.background_color = color;
            }
        }
        self.pattern_fill = EnumPatternFill::Solid;
        Ok(())
    }
}

impl StyleComponent for Fill {
    const KIND: EnumStyleComponentKind = EnumStyleComponentKind::Fill;

    fn write_fingerprint(&self, fp: &mut FingerprintBuilder) {
        fp.push(&self.foreground_color)
            .push(&self.background_color)
            .push(&self.indexed_color)
            .push(&self.pattern_fill);
    }

    impl_apply_non_default!(foreground_color, background_color, indexed_color, pattern_fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fill() {
        let fill = Fill::default();
        assert_eq!(fill.foreground_color(), "FF000000");
        assert_eq!(fill.background_color(), "FF000000");
        assert_eq!(fill.indexed_color(), 64);
        assert_eq!(fill.pattern_fill, EnumPatternFill::None);
        assert_eq!(fill.fingerprint(), "FILFF000000;FF000000;64;none;");
    }

    #[test]
    fn test_set_color_fill_role() {
        let mut fill = Fill::default();
        fill.set_background_color("FF112233").unwrap();
        fill.set_color("ffff0000", EnumFillRole::FillColor).unwrap();

        assert_eq!(fill.foreground_color(), "FFFF0000");
        assert_eq!(fill.background_color(), "FF000000");
        assert_eq!(fill.pattern_fill, EnumPatternFill::Solid);
    }

    #[test]
    fn test_set_color_pattern_role() {
        let fill = Fill::from_color("FF00FF00", EnumFillRole::PatternColor).unwrap();
        assert_eq!(fill.foreground_color(), "FF000000");
        assert_eq!(fill.background_color(), "FF00FF00");
        assert_eq!(fill.pattern_fill, EnumPatternFill::Solid);
    }

    #[test]
    fn test_invalid_values_leave_fill_unchanged() {
        let mut fill = Fill::default();
        assert!(fill.set_indexed_color(65).is_err());
        assert!(fill.set_color("nope", EnumFillRole::FillColor).is_err());
        assert_eq!(fill, Fill::default());

        fill.set_indexed_color(10).unwrap();
        assert_eq!(fill.indexed_color(), 10);
    }
}
