use crate::error::{Error, Result};
use crate::labels::LabelIndex;

/// Addresses a column or row either by logical index or by label.
///
/// Implemented for `usize`, `str` and `String`, and for references to those.
/// Only one integer type implements it, so plain literals like `0` work.
pub trait Key: private::Sealed {
    #[doc(hidden)]
    fn column_in(&self, labels: &LabelIndex) -> Result<usize>;

    #[doc(hidden)]
    fn row_in(&self, labels: &LabelIndex) -> Result<usize>;
}

impl Key for usize {
    fn column_in(&self, _labels: &LabelIndex) -> Result<usize> {
        Ok(*self)
    }

    fn row_in(&self, _labels: &LabelIndex) -> Result<usize> {
        Ok(*self)
    }
}

impl Key for str {
    fn column_in(&self, labels: &LabelIndex) -> Result<usize> {
        labels
            .column_index(self)
            .ok_or_else(|| Error::ColumnNotFound(self.to_string()))
    }

    fn row_in(&self, labels: &LabelIndex) -> Result<usize> {
        labels
            .row_index(self)
            .ok_or_else(|| Error::RowNotFound(self.to_string()))
    }
}

impl Key for String {
    fn column_in(&self, labels: &LabelIndex) -> Result<usize> {
        self.as_str().column_in(labels)
    }

    fn row_in(&self, labels: &LabelIndex) -> Result<usize> {
        self.as_str().row_in(labels)
    }
}

impl<T> Key for &T
where
    T: ?Sized + Key,
{
    fn column_in(&self, labels: &LabelIndex) -> Result<usize> {
        (**self).column_in(labels)
    }

    fn row_in(&self, labels: &LabelIndex) -> Result<usize> {
        (**self).row_in(labels)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}
