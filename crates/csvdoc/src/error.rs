use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Cell text that does not parse as the requested type.
    #[error("cannot convert {text:?} to {type_name}")]
    Conversion { type_name: &'static str, text: String },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("row not found: {0}")]
    RowNotFound(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error("unsupported conversion: {0}")]
    Unsupported(String),

    #[error("document has no path to save to")]
    NoPath,

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl Error {
    pub(crate) fn conversion<T>(text: &str) -> Self {
        Error::Conversion {
            type_name: core::any::type_name::<T>(),
            text: text.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
