//! Cell alignment and protection component.

use crate::component::{StyleComponent, impl_apply_non_default};
use crate::conf::{N_INDENT_MAX, N_TEXT_ROTATION_MAX, N_TEXT_ROTATION_MIN};
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::{FingerprintBuilder, impl_fingerprint_value_token, validate_range};

////////////////////////////////////////////////////////////////////////////////
// #region AlignmentEnums

/// Horizontal alignment; `None` means not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumHorizontalAlign {
    #[default]
    None,
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

impl EnumHorizontalAlign {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::General => "general",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Fill => "fill",
            Self::Justify => "justify",
            Self::CenterContinuous => "centerContinuous",
            Self::Distributed => "distributed",
        }
    }

    /// Whether an indent is meaningful with this alignment.
    pub const fn allows_indent(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Distributed)
    }
}

/// Vertical alignment; `None` means not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumVerticalAlign {
    #[default]
    None,
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

impl EnumVerticalAlign {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Justify => "justify",
            Self::Distributed => "distributed",
        }
    }
}

/// Text overflow handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumTextBreak {
    #[default]
    None,
    WrapText,
    ShrinkToFit,
}

impl EnumTextBreak {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::WrapText => "wrapText",
            Self::ShrinkToFit => "shrinkToFit",
        }
    }
}

/// Horizontal or stacked-vertical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumTextDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl EnumTextDirection {
    /// OOXML-ish token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl_fingerprint_value_token!(
    EnumHorizontalAlign,
    EnumVerticalAlign,
    EnumTextBreak,
    EnumTextDirection
);

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellAlignment

/// Alignment, text control and protection flags of a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellAlignment {
    horizontal_align: EnumHorizontalAlign,
    /// Vertical alignment.
    pub vertical_align: EnumVerticalAlign,
    /// Wrap or shrink behavior.
    pub text_break: EnumTextBreak,
    /// Text direction.
    pub text_direction: EnumTextDirection,
    indent: u8,
    text_rotation: i16,
    /// Hide the formula when the sheet is protected.
    pub hidden: bool,
    /// Lock the cell when the sheet is protected.
    pub locked: bool,
    /// Emit `applyAlignment` even when nothing is aligned.
    pub force_apply_alignment: bool,
}

impl CellAlignment {
    pub fn horizontal_align(&self) -> EnumHorizontalAlign {
        self.horizontal_align
    }

    pub fn indent(&self) -> u8 {
        self.indent
    }

    /// Rotation in degrees (`-90..=90`).
    pub fn text_rotation(&self) -> i16 {
        self.text_rotation
    }

    /// Set horizontal alignment; clears the indent when it no longer applies.
    pub fn set_horizontal_align(&mut self, align: EnumHorizontalAlign) {
        self.horizontal_align = align;
        self.normalize_indent();
    }

    /// Set the indent (`0..=64`).
    ///
    /// Stored as 0 unless the horizontal alignment is left, right or
    /// distributed.
    pub fn set_indent(&mut self, indent: u8) -> Result<(), StyleError> {
        let indent = validate_range("indent", indent, 0, N_INDENT_MAX)?;
        self.indent = if self.horizontal_align.allows_indent() {
            indent
        } else {
            0
        };
        Ok(())
    }

    /// Set rotation in degrees (`-90..=90`).
    pub fn set_text_rotation(&mut self, degrees: i16) -> Result<(), StyleError> {
        self.text_rotation = validate_range(
            "text_rotation",
            degrees,
            N_TEXT_ROTATION_MIN,
            N_TEXT_ROTATION_MAX,
        )?;
        Ok(())
    }

    fn normalize_indent(&mut self) {
        if !self.horizontal_align.allows_indent() {
            self.indent = 0;
        }
    }
}

impl StyleComponent for CellAlignment {
    const KIND: EnumStyleComponentKind = EnumStyleComponentKind::CellAlignment;

    fn write_fingerprint(&self, fp: &mut FingerprintBuilder) {
        fp.push(&self.horizontal_align)
            .push(&self.vertical_align)
            .push(&self.text_break)
            .push(&self.text_direction)
            .push(&self.indent)
            .push(&self.text_rotation)
            .push(&self.hidden)
            .push(&self.locked)
            .push(&self.force_apply_alignment);
    }

    impl_apply_non_default!(
        horizontal_align,
        vertical_align,
        text_break,
        text_direction,
        indent,
        text_rotation,
        hidden,
        locked,
        force_apply_alignment;
        normalize = normalize_indent
    );
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
