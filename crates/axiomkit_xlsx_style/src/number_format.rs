//! Number format component.

use crate::component::{StyleComponent, impl_apply_non_default};
use crate::conf::L_BUILTIN_FORMAT_CODES;
use crate::spec::{EnumStyleComponentKind, StyleError};
use crate::util::{FingerprintBuilder, FingerprintValue};

/// Number format selector: a reserved built-in id or a custom code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumFormatNumber {
    /// Built-in format id (0 = General).
    Builtin(u8),
    /// Use [`NumberFormat::custom_format_code`].
    Custom,
}

impl Default for EnumFormatNumber {
    fn default() -> Self {
        Self::Builtin(0)
    }
}

impl EnumFormatNumber {
    /// Built-in id after validating it against the reserved subset.
    pub fn builtin(id: u8) -> Result<Self, StyleError> {
        if derive_builtin_format_code(id).is_none() {
            return Err(StyleError::invalid_attribute(
                "number",
                id,
                "not a reserved built-in number format id",
            ));
        }
        Ok(Self::Builtin(id))
    }
}

impl FingerprintValue for EnumFormatNumber {
    fn write_fingerprint(&self, out: &mut String) {
        match self {
            Self::Builtin(id) => id.write_fingerprint(out),
            Self::Custom => out.push_str("custom"),
        }
    }
}

/// Excel's code text for a reserved built-in id.
pub fn derive_builtin_format_code(id: u8) -> Option<&'static str> {
    L_BUILTIN_FORMAT_CODES
        .iter()
        .find(|(n_id, _)| *n_id == id)
        .map(|(_, code)| *code)
}

/// Number format of a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberFormat {
    number: EnumFormatNumber,
    custom_format_code: Option<String>,
}

impl NumberFormat {
    /// Number format using a reserved built-in id.
    pub fn from_builtin(id: u8) -> Result<Self, StyleError> {
        Ok(Self {
            number: EnumFormatNumber::builtin(id)?,
            custom_format_code: None,
        })
    }

    /// Custom number format with `code`.
    pub fn from_custom_code(code: &str) -> Result<Self, StyleError> {
        let mut number_format = Self::default();
        number_format.set_custom_format_code(code)?;
        number_format.number = EnumFormatNumber::Custom;
        Ok(number_format)
    }

    /// Built-in format for an id known to be reserved.
    pub(crate) fn from_reserved(id: u8) -> Self {
        debug_assert!(derive_builtin_format_code(id).is_some());
        Self {
            number: EnumFormatNumber::Builtin(id),
            custom_format_code: None,
        }
    }

    pub fn number(&self) -> EnumFormatNumber {
        self.number
    }

    /// Custom code; only meaningful when [`Self::is_custom`].
    pub fn custom_format_code(&self) -> Option<&str> {
        self.custom_format_code.as_deref()
    }

    /// Select the format; built-in ids are validated.
    pub fn set_number(&mut self, number: EnumFormatNumber) -> Result<(), StyleError> {
        self.number = match number {
            EnumFormatNumber::Builtin(id) => EnumFormatNumber::builtin(id)?,
            EnumFormatNumber::Custom => EnumFormatNumber::Custom,
        };
        Ok(())
    }

    /// Assign the custom code text. Empty codes are rejected.
    pub fn set_custom_format_code(&mut self, code: &str) -> Result<(), StyleError> {
        if code.is_empty() {
            return Err(StyleError::invalid_attribute(
                "custom_format_code",
                code,
                "custom format code must not be empty",
            ));
        }
        self.custom_format_code = Some(code.to_string());
        Ok(())
    }

    pub fn is_custom(&self) -> bool {
        self.number == EnumFormatNumber::Custom
    }

    /// Code text the writer emits: built-in text or the custom code.
    pub fn format_code(&self) -> Option<&str> {
        match self.number {
            EnumFormatNumber::Builtin(id) => derive_builtin_format_code(id),
            EnumFormatNumber::Custom => self.custom_format_code(),
        }
    }

    /// Built-in date formats (14..=17, 22).
    pub fn is_date_format(&self) -> bool {
        matches!(self.number, EnumFormatNumber::Builtin(14..=17 | 22))
    }

    /// Built-in time formats (18..=21, 45..=47).
    pub fn is_time_format(&self) -> bool {
        matches!(self.number, EnumFormatNumber::Builtin(18..=21 | 45..=47))
    }
}

impl StyleComponent for NumberFormat {
    const KIND: EnumStyleComponentKind = EnumStyleComponentKind::NumberFormat;

    fn write_fingerprint(&self, fp: &mut FingerprintBuilder) {
        fp.push(&self.number).push(&self.custom_format_code);
    }

    impl_apply_non_default!(number, custom_format_code);
}
