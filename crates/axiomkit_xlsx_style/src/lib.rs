//! `axiomkit_xlsx_style` v1:
//! XLSX cell-style canonicalization and differential composition.
//!
//! Module layout:
//! - `component`     : the `StyleComponent` contract (fingerprint + overlay)
//! - `border`, `alignment`, `fill`, `font`, `number_format` : the five components
//! - `style`         : the `Style` aggregate and `append` composition
//! - `repository`    : per-workbook canonical style store
//! - `conf`          : constants and preset styles
//! - `spec`          : shared enums and errors
//! - `util`          : fingerprint encoding and value validation
pub mod alignment;
pub mod border;
pub mod component;
pub mod conf;
pub mod fill;
pub mod font;
pub mod number_format;
pub mod repository;
pub mod spec;
pub mod style;
pub mod util;

pub use alignment::{
    CellAlignment, EnumHorizontalAlign, EnumTextBreak, EnumTextDirection, EnumVerticalAlign,
};
pub use border::{Border, EnumBorderEdge, EnumBorderStyle};
pub use component::{StyleComponent, derive_component_kind, describe_fragment};
pub use conf::{
    EnumStylePreset, derive_colorized_background_style, derive_colorized_text_style,
    derive_font_style, derive_preset_style,
};
pub use fill::{EnumFillRole, EnumPatternFill, Fill};
pub use font::{
    EnumFontCharset, EnumFontColor, EnumFontFamily, EnumFontScheme, EnumFontVerticalAlign,
    EnumUnderline, Font,
};
pub use number_format::{EnumFormatNumber, NumberFormat, derive_builtin_format_code};
pub use repository::StyleRepository;
pub use spec::{EnumStyleComponentKind, StyleError};
pub use style::{AppendSource, SpecStyleParts, Style};
pub use util::{FingerprintBuilder, FingerprintValue};
