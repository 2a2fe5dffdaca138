use crate::convert::{CellValue, ToText, ToValue};
use crate::error::{Error, Result};
use crate::key::Key;

use super::Document;

impl Document {
    /// Read one cell, converted with the document's [`ConverterParams`](crate::ConverterParams).
    ///
    /// `column` and `row` may each be a logical index or a label.
    pub fn get_cell<T: CellValue>(&self, column: impl Key, row: impl Key) -> Result<T> {
        self.get_cell_with(column, row, self.options.converter)
    }

    pub fn get_cell_with<T>(
        &self,
        column: impl Key,
        row: impl Key,
        converter: impl ToValue<T>,
    ) -> Result<T> {
        let column = column.column_in(&self.labels)?;
        let row = row.row_in(&self.labels)?;
        let cells = self
            .raw_row(row)
            .and_then(|raw| self.grid.row(raw))
            .ok_or_else(|| self.row_range_error(row))?;
        let text = self
            .raw_column(column)
            .and_then(|raw| cells.get(raw))
            .ok_or_else(|| self.column_range_error(column, cells.len(), row))?;
        converter.to_value(text)
    }

    /// Store one cell, growing the table if the position lies outside it.
    pub fn set_cell<T: CellValue>(&mut self, column: impl Key, row: impl Key, value: T) -> Result<()> {
        let converter = self.options.converter;
        self.set_cell_with(column, row, value, converter)
    }

    pub fn set_cell_with<T>(
        &mut self,
        column: impl Key,
        row: impl Key,
        value: T,
        converter: impl ToText<T>,
    ) -> Result<()> {
        let column = column.column_in(&self.labels)?;
        let row = row.row_in(&self.labels)?;
        let raw_row = self.raw_row(row).ok_or_else(|| self.row_range_error(row))?;
        let raw_column = self
            .raw_column(column)
            .ok_or_else(|| self.column_range_error(column, self.grid.width(), row))?;
        let text = converter.to_text(&value)?;
        if self.grid.set(raw_column, raw_row, text) {
            self.rebuild_labels();
        }
        Ok(())
    }

    /// All data cells of one row, row label excluded.
    pub fn get_row<T: CellValue>(&self, row: impl Key) -> Result<Vec<T>> {
        self.get_row_with(row, self.options.converter)
    }

    pub fn get_row_with<T>(&self, row: impl Key, converter: impl ToValue<T>) -> Result<Vec<T>> {
        let row = row.row_in(&self.labels)?;
        let cells = self
            .raw_row(row)
            .and_then(|raw| self.grid.row(raw))
            .ok_or_else(|| self.row_range_error(row))?;
        cells
            .iter()
            .skip(self.column_offset())
            .map(|text| converter.to_value(text))
            .collect()
    }

    /// Overwrite the start of a row with `values`, growing the table as needed.
    pub fn set_row<T: CellValue>(&mut self, row: impl Key, values: &[T]) -> Result<()> {
        let converter = self.options.converter;
        self.set_row_with(row, values, converter)
    }

    pub fn set_row_with<T>(
        &mut self,
        row: impl Key,
        values: &[T],
        converter: impl ToText<T>,
    ) -> Result<()> {
        let row = row.row_in(&self.labels)?;
        let raw_row = self.raw_row(row).ok_or_else(|| self.row_range_error(row))?;
        let texts = values
            .iter()
            .map(|value| converter.to_text(value))
            .collect::<Result<Vec<_>>>()?;
        let first = self.column_offset();
        if self.grid.grow_to(raw_row + 1, first + texts.len()) {
            self.rebuild_labels();
        }
        for (i, text) in texts.into_iter().enumerate() {
            self.grid.set(first + i, raw_row, text);
        }
        Ok(())
    }

    /// All data cells of one column, column label excluded.
    pub fn get_column<T: CellValue>(&self, column: impl Key) -> Result<Vec<T>> {
        self.get_column_with(column, self.options.converter)
    }

    pub fn get_column_with<T>(
        &self,
        column: impl Key,
        converter: impl ToValue<T>,
    ) -> Result<Vec<T>> {
        let column = column.column_in(&self.labels)?;
        let raw_column = self.raw_column(column);
        let row_offset = self.row_offset();
        let mut values = Vec::with_capacity(self.row_count());
        for (raw_row, cells) in self.grid.rows().iter().enumerate().skip(row_offset) {
            let text = raw_column
                .and_then(|raw| cells.get(raw))
                .ok_or_else(|| self.column_range_error(column, cells.len(), raw_row - row_offset))?;
            values.push(converter.to_value(text)?);
        }
        Ok(values)
    }

    /// Overwrite the top of a column with `values`, growing the table as needed.
    pub fn set_column<T: CellValue>(&mut self, column: impl Key, values: &[T]) -> Result<()> {
        let converter = self.options.converter;
        self.set_column_with(column, values, converter)
    }

    pub fn set_column_with<T>(
        &mut self,
        column: impl Key,
        values: &[T],
        converter: impl ToText<T>,
    ) -> Result<()> {
        let column = column.column_in(&self.labels)?;
        let raw_column = self
            .raw_column(column)
            .ok_or_else(|| self.column_range_error(column, self.grid.width(), 0))?;
        let texts = values
            .iter()
            .map(|value| converter.to_text(value))
            .collect::<Result<Vec<_>>>()?;
        let first = self.row_offset();
        if self.grid.grow_to(first + texts.len(), raw_column + 1) {
            self.rebuild_labels();
        }
        for (i, text) in texts.into_iter().enumerate() {
            self.grid.set(raw_column, first + i, text);
        }
        Ok(())
    }

    pub(super) fn row_range_error(&self, row: usize) -> Error {
        Error::OutOfRange(format!(
            "requested row index {row} >= {} (number of rows)",
            self.row_count()
        ))
    }

    pub(super) fn column_range_error(&self, column: usize, raw_width: usize, row: usize) -> Error {
        Error::OutOfRange(format!(
            "requested column index {column} >= {} (number of columns on row index {row})",
            raw_width.saturating_sub(self.column_offset())
        ))
    }
}
