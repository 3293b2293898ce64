//! The `Style` aggregate: one instance of each component plus identity data.

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::component::{StyleComponent, describe_fragment};
use crate::conf::C_STYLE_TAG;
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::FingerprintBuilder;
use crate::{Border, CellAlignment, Fill, Font, NumberFormat};

////////////////////////////////////////////////////////////////////////////////
// #region Style

/// Complete cell style.
///
/// Two styles are the same style iff their [`Style::fingerprint`]s are equal;
/// `==` and `Hash` follow that rule. A style handed to a
/// [`crate::StyleRepository`] comes back as a shared read-only handle; call
/// [`Style::copy_style`] to derive a mutable variant.
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub border: Border,
    pub cell_alignment: CellAlignment,
    pub fill: Fill,
    pub font: Font,
    pub number_format: NumberFormat,
    name: Option<String>,
    order_id: Option<u32>,
    is_internal: bool,
}

impl Style {
    /// Style with every component at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a style from optional parts.
    ///
    /// Fails with [`StyleError::MissingComponent`] for the first absent slot,
    /// in fingerprint order.
    pub fn try_from_parts(parts: SpecStyleParts) -> Result<Self, StyleError> {
        let SpecStyleParts {
            border,
            cell_alignment,
            fill,
            font,
            number_format,
            name,
        } = parts;

        Ok(Self {
            border: border.ok_or(StyleError::MissingComponent(EnumStyleComponentKind::Border))?,
            cell_alignment: cell_alignment.ok_or(StyleError::MissingComponent(
                EnumStyleComponentKind::CellAlignment,
            ))?,
            fill: fill.ok_or(StyleError::MissingComponent(EnumStyleComponentKind::Fill))?,
            font: font.ok_or(StyleError::MissingComponent(EnumStyleComponentKind::Font))?,
            number_format: number_format.ok_or(StyleError::MissingComponent(
                EnumStyleComponentKind::NumberFormat,
            ))?,
            name,
            order_id: None,
            is_internal: false,
        })
    }

    /// Composite fingerprint: tag, order id (once assigned), then the
    /// Border, CellAlignment, Fill, Font and NumberFormat fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut fp = FingerprintBuilder::new(C_STYLE_TAG);
        if let Some(order_id) = self.order_id {
            fp.push(&order_id);
        }
        self.write_components(&mut fp);
        fp.finish()
    }

    /// Fingerprint without the order id; the repository's dedup key.
    pub fn fingerprint_content(&self) -> String {
        let mut fp = FingerprintBuilder::new(C_STYLE_TAG);
        self.write_components(&mut fp);
        fp.finish()
    }

    fn write_components(&self, fp: &mut FingerprintBuilder) {
        fp.push_raw(&self.border.fingerprint())
            .push_raw(&self.cell_alignment.fingerprint())
            .push_raw(&self.fill.fingerprint())
            .push_raw(&self.font.fingerprint())
            .push_raw(&self.number_format.fingerprint());
    }

    /// Explicit name, or the computed fingerprint when none was set.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.fingerprint()),
        }
    }

    pub fn has_explicit_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Forget the explicit name; [`Self::name`] falls back to the fingerprint.
    pub fn clear_name(&mut self) {
        self.name = None;
    }

    /// Order id, assigned once the style is interned.
    pub fn order_id(&self) -> Option<u32> {
        self.order_id
    }

    /// Library-owned preset that callers should only copy or append.
    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    pub(crate) fn assign_order_id(&mut self, order_id: u32) {
        self.order_id = Some(order_id);
    }

    pub(crate) fn clear_order_id(&mut self) {
        self.order_id = None;
    }

    pub(crate) fn mark_internal(mut self) -> Self {
        self.is_internal = true;
        self
    }

    /// Deep copy without order id.
    ///
    /// An explicit name is kept; the copy is caller-owned, so it is never
    /// internal.
    pub fn copy_style(&self) -> Style {
        Style {
            border: self.border.duplicate(),
            cell_alignment: self.cell_alignment.duplicate(),
            fill: self.fill.duplicate(),
            font: self.font.duplicate(),
            number_format: self.number_format.duplicate(),
            name: self.name.clone(),
            order_id: None,
            is_internal: false,
        }
    }

    /// Overlay the non-default attributes of `other` onto `self`.
    ///
    /// `other` is a whole style (all five slots) or a single component.
    /// Name, order id and the internal flag are never touched.
    pub fn append<S: AppendSource + ?Sized>(&mut self, other: &S) -> &mut Self {
        other.append_to(self);
        self
    }

    /// Dynamically typed [`Self::append`].
    ///
    /// Fails with [`StyleError::TypeMismatch`] when `other` is neither a
    /// style nor one of the five components; `self` is left unchanged.
    pub fn append_any(&mut self, other: &dyn Any) -> Result<&mut Self, StyleError> {
        if let Some(style) = other.downcast_ref::<Style>() {
            return Ok(self.append(style));
        }
        if let Some(border) = other.downcast_ref::<Border>() {
            return Ok(self.append(border));
        }
        if let Some(alignment) = other.downcast_ref::<CellAlignment>() {
            return Ok(self.append(alignment));
        }
        if let Some(fill) = other.downcast_ref::<Fill>() {
            return Ok(self.append(fill));
        }
        if let Some(font) = other.downcast_ref::<Font>() {
            return Ok(self.append(font));
        }
        if let Some(number_format) = other.downcast_ref::<NumberFormat>() {
            return Ok(self.append(number_format));
        }
        Err(StyleError::type_mismatch(
            "Style or style component",
            describe_fragment(other),
        ))
    }

    /// New style: a copy of `self` with `other` appended.
    pub fn merged<S: AppendSource + ?Sized>(&self, other: &S) -> Style {
        let mut style = self.copy_style();
        style.append(other);
        style
    }

    /// Total order by order id; unassigned sorts before assigned.
    ///
    /// Independent of structural equality.
    pub fn cmp_order(&self, other: &Style) -> Ordering {
        self.order_id.cmp(&other.order_id)
    }

    /// Dynamically typed [`Self::cmp_order`].
    ///
    /// Fails with [`StyleError::TypeMismatch`] when `other` is not a style.
    pub fn cmp_order_any(&self, other: &dyn Any) -> Result<Ordering, StyleError> {
        match other.downcast_ref::<Style>() {
            Some(style) => Ok(self.cmp_order(style)),
            None => Err(StyleError::type_mismatch("Style", describe_fragment(other))),
        }
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region AppendSource

/// Value that can be appended onto a [`Style`].
pub trait AppendSource {
    /// Overlay the non-default attributes of `self` onto `target`.
    fn append_to(&self, target: &mut Style);
}

impl AppendSource for Style {
    fn append_to(&self, target: &mut Style) {
        self.border.append_to(target);
        self.cell_alignment.append_to(target);
        self.fill.append_to(target);
        self.font.append_to(target);
        self.number_format.append_to(target);
    }
}

impl AppendSource for Border {
    fn append_to(&self, target: &mut Style) {
        target.border.overlay(self);
    }
}

impl AppendSource for CellAlignment {
    fn append_to(&self, target: &mut Style) {
        target.cell_alignment.overlay(self);
    }
}

impl AppendSource for Fill {
    fn append_to(&self, target: &mut Style) {
        target.fill.overlay(self);
    }
}

impl AppendSource for Font {
    fn append_to(&self, target: &mut Style) {
        target.font.overlay(self);
    }
}

impl AppendSource for NumberFormat {
    fn append_to(&self, target: &mut Style) {
        target.number_format.overlay(self);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StyleParts

/// Loose style parts, e.g. as read from a style table record.
#[derive(Debug, Clone, Default)]
pub struct SpecStyleParts {
    pub border: Option<Border>,
    pub cell_alignment: Option<CellAlignment>,
    pub fill: Option<Fill>,
    pub font: Option<Font>,
    pub number_format: Option<NumberFormat>,
    /// Optional explicit style name.
    pub name: Option<String>,
}

impl SpecStyleParts {
    /// Parts with every component present at its default.
    pub fn with_defaults() -> Self {
        Self {
            border: Some(Border::default()),
            cell_alignment: Some(CellAlignment::default()),
            fill: Some(Fill::default()),
            font: Some(Font::default()),
            number_format: Some(NumberFormat::default()),
            name: None,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{EnumFillRole, EnumHorizontalAlign, EnumPatternFill};

    #[test]
    fn test_independent_styles_with_same_attributes_are_equal() {
        let mut style_a = Style::new();
        style_a.font.bold = true;
        let mut style_b = Style::new();
        style_b.font.bold = true;

        assert_eq!(style_a.fingerprint(), style_b.fingerprint());
        assert_eq!(style_a, style_b);
    }

    #[test]
    fn test_fingerprint_component_order() {
        let style = Style::new();
        let c_expected = format!(
            "STY{}{}{}{}{}",
            Border::default().fingerprint(),
            CellAlignment::default().fingerprint(),
            Fill::default().fingerprint(),
            Font::default().fingerprint(),
            NumberFormat::default().fingerprint()
        );
        assert_eq!(style.fingerprint(), c_expected);
        assert_eq!(style.fingerprint_content(), c_expected);
    }

    #[test]
    fn test_order_id_contributes_to_fingerprint() {
        let mut style = Style::new();
        let fp_content = style.fingerprint();
        style.assign_order_id(7);
        assert_eq!(style.fingerprint(), format!("STY7;{}", &fp_content[3..]));
        assert_eq!(style.fingerprint_content(), fp_content);
    }

    #[test]
    fn test_copy_is_independent_and_unordered() {
        let mut style_a = Style::new();
        style_a.font.bold = true;
        style_a.assign_order_id(3);

        let mut style_c = style_a.copy_style();
        assert_eq!(style_c.order_id(), None);
        assert_eq!(style_c.fingerprint(), style_a.fingerprint_content());

        let fp_a_before = style_a.fingerprint();
        style_c
            .fill
            .set_color("FFFF0000", EnumFillRole::FillColor)
            .unwrap();
        assert_ne!(style_c.fingerprint_content(), style_a.fingerprint_content());
        assert_eq!(style_a.fingerprint(), fp_a_before);
        assert_eq!(style_a.fill.pattern_fill, EnumPatternFill::None);
    }

    #[test]
    fn test_copy_keeps_explicit_name_only() {
        let mut style = Style::new();
        assert!(!style.copy_style().has_explicit_name());

        style.set_name("Heading");
        let style_copy = style.copy_style();
        assert_eq!(style_copy.name(), "Heading");
    }

    #[test]
    fn test_name_defaults_to_fingerprint() {
        let style = Style::new();
        assert_eq!(style.name(), style.fingerprint());
    }

    #[test]
    fn test_append_fragment_is_directional_and_idempotent() {
        let mut style_target = Style::new();
        style_target
            .cell_alignment
            .set_horizontal_align(EnumHorizontalAlign::Center);

        let mut style_fragment = Style::new();
        style_fragment
            .number_format
            .set_number(crate::EnumFormatNumber::Builtin(14))
            .unwrap();

        style_target.append(&style_fragment);
        assert!(!style_target.font.bold);
        assert_eq!(
            style_target.number_format.number(),
            crate::EnumFormatNumber::Builtin(14)
        );
        assert_eq!(
            style_target.cell_alignment.horizontal_align(),
            EnumHorizontalAlign::Center
        );

        let fp_once = style_target.fingerprint();
        style_target.append(&style_fragment);
        assert_eq!(style_target.fingerprint(), fp_once);
    }

    #[test]
    fn test_append_fresh_style_is_noop() {
        let mut style = Style::new();
        style.font.italic = true;
        style.fill.set_indexed_color(5).unwrap();
        let fp_before = style.fingerprint();

        style.append(&Style::new());
        assert_eq!(style.fingerprint(), fp_before);
    }

    #[test]
    fn test_append_single_component() {
        let mut style = Style::new();
        let mut font = Font::default();
        font.strike = true;

        style.append(&font);
        assert!(style.font.strike);
        assert_eq!(style.border, Border::default());
    }

    #[test]
    fn test_append_never_touches_identity_fields() {
        let mut style = Style::new();
        style.set_name("Target");
        style.assign_order_id(2);

        let mut style_src = Style::new().mark_internal();
        style_src.set_name("Source");
        style_src.font.bold = true;

        style.append(&style_src);
        assert_eq!(style.name(), "Target");
        assert_eq!(style.order_id(), Some(2));
        assert!(!style.is_internal());
    }

    #[test]
    fn test_append_any_rejects_unknown_types() {
        let mut style = Style::new();
        let fp_before = style.fingerprint();

        let err = style.append_any(&"bold").unwrap_err();
        assert!(matches!(err, StyleError::TypeMismatch { .. }));
        assert_eq!(style.fingerprint(), fp_before);

        let mut font = Font::default();
        font.bold = true;
        style.append_any(&font).unwrap();
        assert!(style.font.bold);
    }

    #[test]
    fn test_cmp_order_unassigned_first() {
        let style_none = Style::new();
        let mut style_1 = Style::new();
        style_1.assign_order_id(1);
        let mut style_2 = Style::new();
        style_2.assign_order_id(2);

        assert_eq!(style_none.cmp_order(&style_1), Ordering::Less);
        assert_eq!(style_2.cmp_order(&style_1), Ordering::Greater);
        assert_eq!(style_1.cmp_order(&style_1.clone()), Ordering::Equal);

        assert_eq!(style_1.cmp_order_any(&style_2).unwrap(), Ordering::Less);
        assert_eq!(
            style_1.cmp_order_any(&Font::default()).unwrap_err(),
            StyleError::type_mismatch("Style", "Font")
        );
    }

    #[test]
    fn test_try_from_parts_reports_missing_component() {
        let mut parts = SpecStyleParts::with_defaults();
        parts.fill = None;
        assert_eq!(
            Style::try_from_parts(parts).unwrap_err(),
            StyleError::MissingComponent(EnumStyleComponentKind::Fill)
        );

        let style = Style::try_from_parts(SpecStyleParts::with_defaults()).unwrap();
        assert_eq!(style, Style::new());
    }
}
