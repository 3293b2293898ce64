//! Cell border component.

use crate::component::{StyleComponent, impl_apply_non_default};
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::{FingerprintBuilder, impl_fingerprint_value_token, normalize_argb};

/// Border line style (OOXML `ST_BorderStyle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumBorderStyle {
    /// No line.
    #[default]
    None,
    Hair,
    Dotted,
    Dashed,
    DashDot,
    DashDotDot,
    SlantDashDot,
    Thin,
    Medium,
    Thick,
    Double,
    MediumDashed,
    MediumDashDot,
    MediumDashDotDot,
}

impl EnumBorderStyle {
    /// OOXML token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hair => "hair",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DashDot => "dashDot",
            Self::DashDotDot => "dashDotDot",
            Self::SlantDashDot => "slantDashDot",
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::MediumDashed => "mediumDashed",
            Self::MediumDashDot => "mediumDashDot",
            Self::MediumDashDotDot => "mediumDashDotDot",
        }
    }
}

impl_fingerprint_value_token!(EnumBorderStyle);

/// One edge of a cell border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumBorderEdge {
    Diagonal,
    Top,
    Bottom,
    Left,
    Right,
}

/// Border lines of a cell.
///
/// Default: every edge `none`, no colors, both diagonal flags off.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Border {
    /// Diagonal line style.
    pub diagonal_style: EnumBorderStyle,
    /// Top edge line style.
    pub top_style: EnumBorderStyle,
    /// Bottom edge line style.
    pub bottom_style: EnumBorderStyle,
    /// Left edge line style.
    pub left_style: EnumBorderStyle,
    /// Right edge line style.
    pub right_style: EnumBorderStyle,
    /// Draw the diagonal from bottom-left to top-right.
    pub diagonal_up: bool,
    /// Draw the diagonal from top-left to bottom-right.
    pub diagonal_down: bool,
    diagonal_color: Option<String>,
    top_color: Option<String>,
    bottom_color: Option<String>,
    left_color: Option<String>,
    right_color: Option<String>,
}

impl Border {
    /// Line style of `edge`.
    pub fn edge_style(&self, edge: EnumBorderEdge) -> EnumBorderStyle {
        match edge {
            EnumBorderEdge::Diagonal => self.diagonal_style,
            EnumBorderEdge::Top => self.top_style,
            EnumBorderEdge::Bottom => self.bottom_style,
            EnumBorderEdge::Left => self.left_style,
            EnumBorderEdge::Right => self.right_style,
        }
    }

    /// ARGB color of `edge`, if assigned.
    pub fn edge_color(&self, edge: EnumBorderEdge) -> Option<&str> {
        self.color_slot(edge).as_deref()
    }

    /// Set the line style of `edge`.
    pub fn set_edge_style(&mut self, edge: EnumBorderEdge, style: EnumBorderStyle) {
        match edge {
            EnumBorderEdge::Diagonal => self.diagonal_style = style,
            EnumBorderEdge::Top => self.top_style = style,
            EnumBorderEdge::Bottom => self.bottom_style = style,
            EnumBorderEdge::Left => self.left_style = style,
            EnumBorderEdge::Right => self.right_style = style,
        }
    }

    /// Assign (or clear with `None`) the ARGB color of `edge`.
    pub fn set_edge_color(
        &mut self,
        edge: EnumBorderEdge,
        color: Option<&str>,
    ) -> Result<(), StyleError> {
        let color = match color {
            Some(val) => Some(normalize_argb(derive_color_attribute(edge), val)?),
            None => None,
        };
        *self.color_slot_mut(edge) = color;
        Ok(())
    }

    /// Set style and color of the four outer edges at once.
    pub fn set_all_edges(
        &mut self,
        style: EnumBorderStyle,
        color: Option<&str>,
    ) -> Result<(), StyleError> {
        let color = match color {
            Some(val) => Some(normalize_argb("border color", val)?),
            None => None,
        };
        for edge in [
            EnumBorderEdge::Top,
            EnumBorderEdge::Bottom,
            EnumBorderEdge::Left,
            EnumBorderEdge::Right,
        ] {
            self.set_edge_style(edge, style);
            *self.color_slot_mut(edge) = color.clone();
        }
        Ok(())
    }

    /// `true` when no edge draws a line.
    pub fn is_empty(&self) -> bool {
        [
            self.diagonal_style,
            self.top_style,
            self.bottom_style,
            self.left_style,
            self.right_style,
        ]
        .iter()
        .all(|style| *style == EnumBorderStyle::None)
    }

    fn color_slot(&self, edge: EnumBorderEdge) -> &Option<String> {
        match edge {
            EnumBorderEdge::Diagonal => &self.diagonal_color,
            EnumBorderEdge::Top => &self.top_color,
            EnumBorderEdge::Bottom => &self.bottom_color,
            EnumBorderEdge::Left => &self.left_color,
            EnumBorderEdge::Right => &self.right_color,
        }
    }

    fn color_slot_mut(&mut self, edge: EnumBorderEdge) -> &mut Option<String> {
        match edge {
            EnumBorderEdge::Diagonal => &mut self.diagonal_color,
            EnumBorderEdge::Top => &mut self.top_color,
            EnumBorderEdge::Bottom => &mut self.bottom_color,
            EnumBorderEdge::Left => &mut self.left_color,
            EnumBorderEdge::Right => &mut self.right_color,
        }
    }
}

fn derive_color_attribute(edge: EnumBorderEdge) -> &'static str {
    match edge {
        EnumBorderEdge::Diagonal => "diagonal_color",
        EnumBorderEdge::Top => "top_color",
        EnumBorderEdge::Bottom => "bottom_color",
        EnumBorderEdge::Left => "left_color",
        EnumBorderEdge::Right => "right_color",
    }
}

impl StyleComponent for Border {
    const KIND: EnumStyleComponentKind = EnumStyleComponentKind::Border;

    fn write_fingerprint(&self, fp: &mut FingerprintBuilder) {
        fp.push(&self.diagonal_up)
            .push(&self.diagonal_down)
            .push(&self.diagonal_style)
            .push(&self.diagonal_color)
            .push(&self.top_style)
            .push(&self.top_color)
            .push(&self.bottom_style)
            .push(&self.bottom_color)
            .push(&self.left_style)
            .push(&self.left_color)
            .push(&self.right_style)
            .push(&self.right_color);
    }

    impl_apply_non_default!(
        diagonal_style,
        top_style,
        bottom_style,
        left_style,
        right_style,
        diagonal_up,
        diagonal_down,
        diagonal_color,
        top_color,
        bottom_color,
        left_color,
        right_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_border_fingerprint() {
        assert_eq!(
            Border::default().fingerprint(),
            "BRD0;0;none;#;none;#;none;#;none;#;none;#;"
        );
        assert!(Border::default().is_empty());
    }

    #[test]
    fn test_edge_color_is_validated_at_assignment() {
        let mut border = Border::default();
        let err = border
            .set_edge_color(EnumBorderEdge::Top, Some("red"))
            .unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidAttribute {
                attribute: "top_color",
                ..
            }
        ));
        assert_eq!(border.edge_color(EnumBorderEdge::Top), None);

        border
            .set_edge_color(EnumBorderEdge::Top, Some("ffff0000"))
            .unwrap();
        assert_eq!(border.edge_color(EnumBorderEdge::Top), Some("FFFF0000"));
    }

    #[test]
    fn test_set_all_edges_leaves_diagonal_alone() {
        let mut border = Border::default();
        border
            .set_all_edges(EnumBorderStyle::Thin, Some("FF000000"))
            .unwrap();
        assert_eq!(border.edge_style(EnumBorderEdge::Left), EnumBorderStyle::Thin);
        assert_eq!(border.edge_color(EnumBorderEdge::Right), Some("FF000000"));
        assert_eq!(
            border.edge_style(EnumBorderEdge::Diagonal),
            EnumBorderStyle::None
        );
        assert_eq!(border.edge_color(EnumBorderEdge::Diagonal), None);
    }

    #[test]
    fn test_overlay_only_copies_non_default_edges() {
        let mut border_target = Border::default();
        border_target.left_style = EnumBorderStyle::Thick;

        let mut border_src = Border::default();
        border_src.top_style = EnumBorderStyle::Dashed;
        border_src.diagonal_down = true;

        border_target.overlay(&border_src);
        assert_eq!(border_target.left_style, EnumBorderStyle::Thick);
        assert_eq!(border_target.top_style, EnumBorderStyle::Dashed);
        assert!(border_target.diagonal_down);
        assert!(!border_target.diagonal_up);
    }
}
