//! The capability set shared by every formatting aspect of a style.

use std::any::Any;
use std::fmt;

use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::FingerprintBuilder;
use crate::{Border, CellAlignment, Fill, Font, NumberFormat, Style};

/// One formatting aspect of a [`Style`] (border, fill, font, ...).
///
/// A component is a flat bag of attributes. Two components are the same
/// formatting definition iff their fingerprints are equal.
pub trait StyleComponent: Clone + Default + fmt::Debug + Any {
    /// Concrete kind, also selecting the fingerprint tag.
    const KIND: EnumStyleComponentKind;

    /// Write every attribute, in declaration order, after the tag.
    fn write_fingerprint(&self, fp: &mut FingerprintBuilder);

    /// Overlay every attribute of `source` that differs from `fresh_default`.
    ///
    /// Attributes equal to their default in `source` leave `self` untouched.
    fn apply_non_default(&mut self, source: &Self, fresh_default: &Self);

    /// Deterministic content fingerprint, starting with the kind tag.
    fn fingerprint(&self) -> String {
        let mut fp = FingerprintBuilder::new(Self::KIND.tag());
        self.write_fingerprint(&mut fp);
        fp.finish()
    }

    /// Independent deep copy.
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// [`Self::apply_non_default`] against a brand-new default instance.
    fn overlay(&mut self, source: &Self) {
        let fresh_default = Self::default();
        self.apply_non_default(source, &fresh_default);
    }

    /// Dynamically typed overlay.
    ///
    /// Fails with [`StyleError::TypeMismatch`] when `source` is not a `Self`;
    /// `self` is left unchanged in that case.
    fn apply_non_default_any(&mut self, source: &dyn Any) -> Result<(), StyleError> {
        let Some(source) = source.downcast_ref::<Self>() else {
            return Err(StyleError::type_mismatch(
                Self::KIND.name(),
                describe_fragment(source),
            ));
        };
        self.overlay(source);
        Ok(())
    }
}

/// Name the style-related type behind `value`, or `"unknown"`.
pub fn describe_fragment(value: &dyn Any) -> String {
    if value.is::<Style>() {
        return "Style".to_string();
    }
    derive_component_kind(value)
        .map(|kind| kind.name().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Component kind of `value` when it is one of the five components.
pub fn derive_component_kind(value: &dyn Any) -> Option<EnumStyleComponentKind> {
    if value.is::<Border>() {
        Some(EnumStyleComponentKind::Border)
    } else if value.is::<CellAlignment>() {
        Some(EnumStyleComponentKind::CellAlignment)
    } else if value.is::<Fill>() {
        Some(EnumStyleComponentKind::Fill)
    } else if value.is::<Font>() {
        Some(EnumStyleComponentKind::Font)
    } else if value.is::<NumberFormat>() {
        Some(EnumStyleComponentKind::NumberFormat)
    } else {
        None
    }
}

/// Generate [`StyleComponent::apply_non_default`] from an explicit field table.
///
/// `normalize` names an optional `&mut self` method run after the overlay to
/// re-establish cross-attribute invariants.
macro_rules! impl_apply_non_default {
    ($($field:ident),+ $(,)?) => {
        fn apply_non_default(&mut self, source: &Self, fresh_default: &Self) {
            $(
                if source.$field != fresh_default.$field {
                    self.$field = source.$field.clone();
                }
            )+
        }
    };
    ($($field:ident),+ ; normalize = $normalize:ident) => {
        fn apply_non_default(&mut self, source: &Self, fresh_default: &Self) {
            $(
                if source.$field != fresh_default.$field {
                    self.$field = source.$field.clone();
                }
            )+
            self.$normalize();
        }
    };
}

pub(crate) use impl_apply_non_default;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_fragment() {
        assert_eq!(describe_fragment(&Border::default()), "Border");
        assert_eq!(describe_fragment(&Style::new()), "Style");
        assert_eq!(describe_fragment(&42u8), "unknown");
    }

    #[test]
    fn test_apply_non_default_any_rejects_foreign_kind() {
        let mut font = Font::default();
        font.bold = true;
        let fp_before = font.fingerprint();

        let err = font
            .apply_non_default_any(&Fill::default())
            .expect_err("fill must not overlay a font");
        assert_eq!(err, StyleError::type_mismatch("Font", "Fill"));
        assert_eq!(font.fingerprint(), fp_before);
    }

    #[test]
    fn test_apply_non_default_any_same_kind() {
        let mut font = Font::default();
        let mut font_src = Font::default();
        font_src.italic = true;
        font.apply_non_default_any(&font_src).unwrap();
        assert!(font.italic);
    }
}
