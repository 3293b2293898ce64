//! Stateless helpers shared by the style components.

use crate::conf::{C_FINGERPRINT_DELIMITER, C_FINGERPRINT_NULL, C_FINGERPRINT_NULL_ESCAPED};
use crate::spec::StyleError;

////////////////////////////////////////////////////////////////////////////////
// #region FingerprintEncoding

/// Attribute value that can contribute to a component fingerprint.
///
/// Implementations write the canonical text of the value only; the
/// terminating delimiter is appended by [`FingerprintBuilder::push`].
pub trait FingerprintValue {
    /// Append the canonical textual form of `self` to `out`.
    fn write_fingerprint(&self, out: &mut String);
}

impl FingerprintValue for bool {
    fn write_fingerprint(&self, out: &mut String) {
        out.push(if *self { '1' } else { '0' });
    }
}

macro_rules! impl_fingerprint_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FingerprintValue for $ty {
                fn write_fingerprint(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

impl_fingerprint_value_display!(u8, u16, u32, i16, i32, i64, u64, usize);

impl FingerprintValue for f64 {
    fn write_fingerprint(&self, out: &mut String) {
        // `-0` and `0` are the same size.
        let n_value = if *self == 0.0 { 0.0 } else { *self };
        out.push_str(&n_value.to_string());
    }
}

impl FingerprintValue for str {
    fn write_fingerprint(&self, out: &mut String) {
        let c_escaped = escape_fingerprint_text(self);
        if c_escaped == C_FINGERPRINT_NULL {
            out.push_str(C_FINGERPRINT_NULL_ESCAPED);
        } else {
            out.push_str(&c_escaped);
        }
    }
}

impl FingerprintValue for &str {
    fn write_fingerprint(&self, out: &mut String) {
        (**self).write_fingerprint(out);
    }
}

impl FingerprintValue for String {
    fn write_fingerprint(&self, out: &mut String) {
        self.as_str().write_fingerprint(out);
    }
}

impl<T: FingerprintValue> FingerprintValue for Option<T> {
    fn write_fingerprint(&self, out: &mut String) {
        match self {
            Some(value) => value.write_fingerprint(out),
            None => out.push_str(C_FINGERPRINT_NULL),
        }
    }
}

/// Implement [`FingerprintValue`] for enums through their `as_str()` token.
macro_rules! impl_fingerprint_value_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::util::FingerprintValue for $ty {
                fn write_fingerprint(&self, out: &mut String) {
                    out.push_str(self.as_str());
                }
            }
        )*
    };
}

pub(crate) use impl_fingerprint_value_token;

/// Incremental fingerprint writer: `TAG` then `value;` per attribute.
#[derive(Debug, Default)]
pub struct FingerprintBuilder {
    buf: String,
}

impl FingerprintBuilder {
    /// Start a fingerprint with the component-specific literal tag.
    pub fn new(tag: &str) -> Self {
        let mut buf = String::with_capacity(64);
        buf.push_str(tag);
        Self { buf }
    }

    /// Append one attribute followed by the delimiter.
    pub fn push<T: FingerprintValue + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.write_fingerprint(&mut self.buf);
        self.buf.push(C_FINGERPRINT_DELIMITER);
        self
    }

    /// Append an already self-delimited fingerprint verbatim.
    pub fn push_raw(&mut self, fingerprint: &str) -> &mut Self {
        self.buf.push_str(fingerprint);
        self
    }

    /// Finish and return the fingerprint text.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape `\` and the delimiter so free text can never end an attribute early.
pub fn escape_fingerprint_text(text: &str) -> String {
    let mut c_out = String::with_capacity(text.len());
    for chr in text.chars() {
        if chr == '\\' || chr == C_FINGERPRINT_DELIMITER {
            c_out.push('\\');
        }
        c_out.push(chr);
    }
    c_out
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region AttributeValidation

/// Validate and normalize an ARGB color string (`AARRGGBB`, upper case).
///
/// A leading `#` is tolerated and stripped.
pub fn normalize_argb(attribute: &'static str, value: &str) -> Result<String, StyleError> {
    let c_hex = value.trim().trim_start_matches('#');
    if c_hex.len() != 8 || !c_hex.chars().all(|chr| chr.is_ascii_hexdigit()) {
        return Err(StyleError::invalid_attribute(
            attribute,
            value,
            "expected an 8-digit ARGB hex string",
        ));
    }
    Ok(c_hex.to_ascii_uppercase())
}

/// Check `value` lies in `min..=max`.
pub fn validate_range<T>(attribute: &'static str, value: T, min: T, max: T) -> Result<T, StyleError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(StyleError::invalid_attribute(
            attribute,
            value.to_string(),
            format!("expected a value in {min}..={max}"),
        ));
    }
    Ok(value)
}

/// Parse an ARGB string into `(alpha, rgb)`; caller guarantees it was normalized.
pub fn split_argb(argb: &str) -> Option<(u8, u32)> {
    let n_argb = u32::from_str_radix(argb, 16).ok()?;
    Some(((n_argb >> 24) as u8, n_argb & 0x00FF_FFFF))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
