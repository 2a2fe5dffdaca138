#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Line ending used for new documents when nothing was read to detect it from.
pub const PLATFORM_HAS_CR: bool = cfg!(windows);

/// Which raw row holds the column labels and which raw column holds the row labels.
///
/// A negative index means "no labels": every row (or column) is data. Logical
/// indices used by the accessors are offset by `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelParams {
    pub column_name_idx: isize,
    pub row_name_idx: isize,
}

impl LabelParams {
    pub const fn new(column_name_idx: isize, row_name_idx: isize) -> Self {
        Self {
            column_name_idx,
            row_name_idx,
        }
    }

    /// No header row and no header column.
    pub const fn none() -> Self {
        Self::new(-1, -1)
    }

    /// Number of raw columns in front of logical column 0.
    pub fn column_offset(&self) -> usize {
        self.row_name_idx.saturating_add(1).max(0) as usize
    }

    /// Number of raw rows in front of logical row 0.
    pub fn row_offset(&self) -> usize {
        self.column_name_idx.saturating_add(1).max(0) as usize
    }

    pub fn has_column_labels(&self) -> bool {
        self.column_name_idx >= 0
    }

    pub fn has_row_labels(&self) -> bool {
        self.row_name_idx >= 0
    }
}

impl Default for LabelParams {
    fn default() -> Self {
        Self::new(0, -1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeparatorParams {
    pub separator: u8,
    /// Strip spaces and tabs around every cell before dequoting.
    pub trim: bool,
    /// Write `\r\n` instead of `\n`. Overwritten by detection when a document is loaded.
    pub has_cr: bool,
    /// Allow CR/LF inside quoted cells.
    pub quoted_linebreaks: bool,
    /// Dequote on read, quote on write.
    pub auto_quote: bool,
    pub quote_char: u8,
}

impl SeparatorParams {
    pub fn new(separator: u8) -> Self {
        Self {
            separator,
            ..Self::default()
        }
    }

    /// Separator and quote char must be ASCII: they are matched as single bytes.
    pub fn validate(&self) -> Result<()> {
        ascii_only("separator", self.separator)?;
        ascii_only("quote char", self.quote_char)
    }
}

fn ascii_only(what: &str, byte: u8) -> Result<()> {
    if byte.is_ascii() {
        Ok(())
    } else {
        Err(Error::InvalidOptions(format!("{what} {byte:#04x} is not ASCII")))
    }
}

impl Default for SeparatorParams {
    fn default() -> Self {
        Self {
            separator: b',',
            trim: false,
            has_cr: PLATFORM_HAS_CR,
            quoted_linebreaks: false,
            auto_quote: true,
            quote_char: b'"',
        }
    }
}

/// Decimal and grouping characters used when reading and writing floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericLocale {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl NumericLocale {
    /// The "C" locale: `.` decimal point, no grouping.
    pub const C: NumericLocale = NumericLocale {
        decimal_separator: '.',
        grouping_separator: None,
    };

    pub const fn new(decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self::C
    }
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterParams {
    /// Substitute `default_integer` / `default_float` when numeric parsing fails.
    pub has_default_converter: bool,
    /// JSON has no NaN; `null` reads back as NaN.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "nan_as_null::deserialize"))]
    pub default_float: f64,
    pub default_integer: i64,
    /// Honor `locale` when parsing and formatting floats; `false` accepts only `.`.
    pub numeric_locale: bool,
    pub locale: NumericLocale,
}

impl ConverterParams {
    /// Defaults enabled, substituting `default_integer` and NaN.
    pub fn with_default_integer(default_integer: i64) -> Self {
        Self {
            has_default_converter: true,
            default_integer,
            ..Self::default()
        }
    }

    /// Defaults enabled, substituting `default_float` and 0.
    pub fn with_default_float(default_float: f64) -> Self {
        Self {
            has_default_converter: true,
            default_float,
            ..Self::default()
        }
    }

    pub(crate) fn decimal_separator(&self) -> char {
        if self.numeric_locale {
            self.locale.decimal_separator
        } else {
            '.'
        }
    }
}

/// NaN defaults compare equal, so default parameter sets do too.
impl PartialEq for ConverterParams {
    fn eq(&self, other: &Self) -> bool {
        let same_float = self.default_float == other.default_float
            || (self.default_float.is_nan() && other.default_float.is_nan());
        same_float
            && self.has_default_converter == other.has_default_converter
            && self.default_integer == other.default_integer
            && self.numeric_locale == other.numeric_locale
            && self.locale == other.locale
    }
}

impl Default for ConverterParams {
    fn default() -> Self {
        Self {
            has_default_converter: false,
            default_float: f64::NAN,
            default_integer: 0,
            numeric_locale: true,
            locale: NumericLocale::C,
        }
    }
}

#[cfg(feature = "serde")]
mod nan_as_null {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LineReaderParams {
    pub skip_comment_lines: bool,
    pub comment_prefix: u8,
    pub skip_empty_lines: bool,
}

impl LineReaderParams {
    pub fn skip_comments(comment_prefix: u8) -> Self {
        Self {
            skip_comment_lines: true,
            comment_prefix,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        ascii_only("comment prefix", self.comment_prefix)
    }
}

impl Default for LineReaderParams {
    fn default() -> Self {
        Self {
            skip_comment_lines: false,
            comment_prefix: b'#',
            skip_empty_lines: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub labels: LabelParams,
    pub separator: SeparatorParams,
    pub converter: ConverterParams,
    pub line_reader: LineReaderParams,
}

impl Options {
    pub fn with_labels(mut self, column_name_idx: isize, row_name_idx: isize) -> Self {
        self.labels = LabelParams::new(column_name_idx, row_name_idx);
        self
    }

    pub fn with_separator(mut self, separator: SeparatorParams) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_converter(mut self, converter: ConverterParams) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_line_reader(mut self, line_reader: LineReaderParams) -> Self {
        self.line_reader = line_reader;
        self
    }
}
