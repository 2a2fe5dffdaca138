//! Conversion between cell text and typed values.
//!
//! Built-in types implement [`CellValue`] and are converted according to a
//! [`ConverterParams`]. Anything else can be read or written through the
//! [`ToValue`] / [`ToText`] traits, which closures implement directly:
//!
//! ```
//! use csvdoc::{Document, Options, Result};
//!
//! let mut doc = Document::from_reader("a,b\n1,x\n".as_bytes(), Options::default())?;
//! let flag = doc.get_cell_with(1, 0, |text: &str| -> Result<bool> { Ok(text == "x") })?;
//! assert!(flag);
//! doc.set_cell_with(0, 0, true, |v: &bool| -> Result<String> {
//!     Ok(if *v { "yes" } else { "no" }.to_string())
//! })?;
//! assert_eq!(doc.get_cell::<String>(0, 0)?, "yes");
//! # Ok::<(), csvdoc::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::number;
use crate::options::ConverterParams;

/// A type that can be stored in a cell.
pub trait CellValue: Sized {
    fn from_cell(text: &str, params: &ConverterParams) -> Result<Self>;
    fn to_cell(&self, params: &ConverterParams) -> String;
}

/// Reads a `T` out of cell text.
pub trait ToValue<T> {
    fn to_value(&self, text: &str) -> Result<T>;
}

/// Writes a `T` as cell text.
pub trait ToText<T> {
    fn to_text(&self, value: &T) -> Result<String>;
}

/// Both directions.
pub trait Converter<T>: ToValue<T> + ToText<T> {}

impl<T, C> Converter<T> for C where C: ToValue<T> + ToText<T> + ?Sized {}

impl<T: CellValue> ToValue<T> for ConverterParams {
    fn to_value(&self, text: &str) -> Result<T> {
        T::from_cell(text, self)
    }
}

impl<T: CellValue> ToText<T> for ConverterParams {
    fn to_text(&self, value: &T) -> Result<String> {
        Ok(value.to_cell(self))
    }
}

impl<T, F> ToValue<T> for F
where
    F: Fn(&str) -> Result<T>,
{
    fn to_value(&self, text: &str) -> Result<T> {
        self(text)
    }
}

impl<T, F> ToText<T> for F
where
    F: Fn(&T) -> Result<String>,
{
    fn to_text(&self, value: &T) -> Result<String> {
        self(value)
    }
}

/// A parse function usable where a full [`Converter`] is required; writing
/// through it fails with [`Error::Unsupported`].
#[derive(Debug, Clone, Copy)]
pub struct ReadOnly<F>(pub F);

impl<T, F> ToValue<T> for ReadOnly<F>
where
    F: Fn(&str) -> Result<T>,
{
    fn to_value(&self, text: &str) -> Result<T> {
        (self.0)(text)
    }
}

impl<T, F> ToText<T> for ReadOnly<F> {
    fn to_text(&self, _value: &T) -> Result<String> {
        Err(Error::Unsupported(format!(
            "{} is read-only",
            core::any::type_name::<T>()
        )))
    }
}

/// A format function usable where a full [`Converter`] is required; reading
/// through it fails with [`Error::Unsupported`].
#[derive(Debug, Clone, Copy)]
pub struct WriteOnly<F>(pub F);

impl<T, F> ToValue<T> for WriteOnly<F> {
    fn to_value(&self, _text: &str) -> Result<T> {
        Err(Error::Unsupported(format!(
            "{} is write-only",
            core::any::type_name::<T>()
        )))
    }
}

impl<T, F> ToText<T> for WriteOnly<F>
where
    F: Fn(&T) -> Result<String>,
{
    fn to_text(&self, value: &T) -> Result<String> {
        (self.0)(value)
    }
}

macro_rules! integer_cell {
    ($($ty:ty),* $(,)?) => {$(
        impl CellValue for $ty {
            fn from_cell(text: &str, params: &ConverterParams) -> Result<Self> {
                match number::parse_integer::<$ty>(text) {
                    Some(value) => Ok(value),
                    None if params.has_default_converter => <$ty>::try_from(params.default_integer)
                        .map_err(|_| Error::conversion::<$ty>(text)),
                    None => Err(Error::conversion::<$ty>(text)),
                }
            }

            fn to_cell(&self, _params: &ConverterParams) -> String {
                self.to_string()
            }
        }
    )*};
}

integer_cell!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_cell {
    ($($ty:ty),* $(,)?) => {$(
        impl CellValue for $ty {
            fn from_cell(text: &str, params: &ConverterParams) -> Result<Self> {
                match number::parse_float::<$ty>(text, params) {
                    Some(value) => Ok(value),
                    None if params.has_default_converter => Ok(params.default_float as $ty),
                    None => Err(Error::conversion::<$ty>(text)),
                }
            }

            fn to_cell(&self, params: &ConverterParams) -> String {
                number::format_float(*self, params)
            }
        }
    )*};
}

float_cell!(f32, f64);

impl CellValue for String {
    fn from_cell(text: &str, _params: &ConverterParams) -> Result<Self> {
        Ok(text.to_string())
    }

    fn to_cell(&self, _params: &ConverterParams) -> String {
        self.clone()
    }
}

impl CellValue for char {
    fn from_cell(text: &str, _params: &ConverterParams) -> Result<Self> {
        text.chars().next().ok_or_else(|| Error::conversion::<char>(text))
    }

    fn to_cell(&self, _params: &ConverterParams) -> String {
        self.to_string()
    }
}

impl CellValue for bool {
    fn from_cell(text: &str, _params: &ConverterParams) -> Result<Self> {
        Ok(text == "true")
    }

    fn to_cell(&self, _params: &ConverterParams) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}
