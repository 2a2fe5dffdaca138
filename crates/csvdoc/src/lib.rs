#![doc = include_str!("../README.md")]

pub mod convert;
pub mod decode;
pub mod encode;
pub mod encoding;
pub mod error;
pub mod key;
pub mod labels;
pub mod options;

mod document;
mod grid;
mod number;

pub use crate::convert::{CellValue, Converter, ReadOnly, ToText, ToValue, WriteOnly};
pub use crate::document::Document;
pub use crate::encoding::TextEncoding;
pub use crate::error::{Error, Result};
pub use crate::key::Key;
pub use crate::options::{
    ConverterParams, LabelParams, LineReaderParams, NumericLocale, Options, SeparatorParams,
};
