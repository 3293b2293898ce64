//! Shared style models and the top-level error type.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Concrete kind of a style component.
///
/// The declaration order is the order in which component fingerprints are
/// concatenated into a style fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumStyleComponentKind {
    /// Cell border lines and colors.
    Border,
    /// Alignment and protection.
    CellAlignment,
    /// Background fill.
    Fill,
    /// Text font.
    Font,
    /// Number format code.
    NumberFormat,
}

impl EnumStyleComponentKind {
    /// All kinds in fingerprint order.
    pub const ALL: [EnumStyleComponentKind; 5] = [
        Self::Border,
        Self::CellAlignment,
        Self::Fill,
        Self::Font,
        Self::NumberFormat,
    ];

    /// Literal fingerprint tag of this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Border => "BRD",
            Self::CellAlignment => "ALN",
            Self::Fill => "FIL",
            Self::Font => "FNT",
            Self::NumberFormat => "NMF",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Border => "Border",
            Self::CellAlignment => "CellAlignment",
            Self::Fill => "Fill",
            Self::Font => "Font",
            Self::NumberFormat => "NumberFormat",
        }
    }
}

impl fmt::Display for EnumStyleComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Errors raised by style construction, overlay and repository operations.
///
/// Every variant is reported at the call that violated the contract; the
/// operands of a failed call are left unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// Overlay source is not of the receiver's concrete kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind expected by the receiver.
        expected: String,
        /// Kind (or type name) actually supplied.
        found: String,
    },
    /// A style was assembled without one of its five components.
    #[error("style is missing its {0} component")]
    MissingComponent(EnumStyleComponentKind),
    /// Setter received an out-of-range or malformed value.
    #[error("invalid value {value:?} for {attribute}: {reason}")]
    InvalidAttribute {
        /// Attribute name.
        attribute: &'static str,
        /// Rejected value as text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Removal target was never interned in this repository.
    #[error("style is not interned in this repository")]
    StyleNotInterned,
    /// Removal target still has live referents.
    #[error("style #{order_id} is still referenced by {n_referents} holder(s)")]
    StyleStillReferenced {
        /// Order id of the style.
        order_id: u32,
        /// Number of outstanding handles besides the caller's.
        n_referents: usize,
    },
}

impl StyleError {
    /// Build an [`StyleError::InvalidAttribute`].
    pub fn invalid_attribute(
        attribute: &'static str,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            attribute,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Build an [`StyleError::TypeMismatch`].
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
