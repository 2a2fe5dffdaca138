use crate::convert::CellValue;
use crate::error::{Error, Result};
use crate::key::Key;

use super::Document;

impl Document {
    /// Number of data columns: the widest row minus the row-label column.
    pub fn column_count(&self) -> usize {
        self.grid.width().saturating_sub(self.column_offset())
    }

    /// Number of data rows: all rows minus the header row.
    pub fn row_count(&self) -> usize {
        self.grid.row_count().saturating_sub(self.row_offset())
    }

    /// Logical index of the column labeled `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.labels.column_index(name)
    }

    /// Logical index of the row labeled `name`.
    pub fn row_index(&self, name: &str) -> Option<usize> {
        self.labels.row_index(name)
    }

    pub fn column_name(&self, column: usize) -> Result<&str> {
        let header = self.column_header_row()?;
        self.raw_column(column)
            .and_then(|raw| self.grid.cell(raw, header))
            .ok_or_else(|| Error::OutOfRange(format!("column name out of range: {column}")))
    }

    pub fn row_name(&self, row: usize) -> Result<&str> {
        let header = self.row_header_column()?;
        self.raw_row(row)
            .and_then(|raw| self.grid.cell(header, raw))
            .ok_or_else(|| Error::OutOfRange(format!("row name out of range: {row}")))
    }

    /// Labels of all data columns, empty without a header row.
    pub fn column_names(&self) -> Vec<&str> {
        let Ok(header) = self.column_header_row() else {
            return Vec::new();
        };
        self.grid
            .row(header)
            .map(|cells| {
                cells
                    .iter()
                    .skip(self.column_offset())
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Labels of all data rows, empty without a header column.
    pub fn row_names(&self) -> Vec<&str> {
        let Ok(header) = self.row_header_column() else {
            return Vec::new();
        };
        self.grid
            .rows()
            .iter()
            .skip(self.row_offset())
            .map(|cells| cells.get(header).map(String::as_str).unwrap_or(""))
            .collect()
    }

    pub fn set_column_name(&mut self, column: usize, name: &str) -> Result<()> {
        let header = self.column_header_row()?;
        let raw_column = self
            .raw_column(column)
            .ok_or_else(|| Error::OutOfRange(format!("column name out of range: {column}")))?;
        let grew = self.grid.grow_to(header + 1, raw_column + 1);
        self.grid.set(raw_column, header, name.to_string());
        if grew {
            self.rebuild_labels();
        } else {
            self.labels.rename_column(raw_column, name);
        }
        Ok(())
    }

    pub fn set_row_name(&mut self, row: usize, name: &str) -> Result<()> {
        let header = self.row_header_column()?;
        let raw_row = self
            .raw_row(row)
            .ok_or_else(|| Error::OutOfRange(format!("row name out of range: {row}")))?;
        let grew = self.grid.grow_to(raw_row + 1, header + 1);
        self.grid.set(header, raw_row, name.to_string());
        if grew {
            self.rebuild_labels();
        } else {
            self.labels.rename_row(raw_row, name);
        }
        Ok(())
    }

    /// Insert a row before logical row `row`; `row == row_count()` appends.
    ///
    /// Empty `values` inserts a row of empty cells as wide as the table.
    pub fn insert_row<T: CellValue>(
        &mut self,
        row: usize,
        values: &[T],
        name: Option<&str>,
    ) -> Result<()> {
        if name.is_some() {
            self.row_header_column()?;
        }
        let converter = self.options.converter;
        let first = self.column_offset();
        let mut cells = vec![String::new(); first];
        cells.extend(values.iter().map(|value| value.to_cell(&converter)));
        if values.is_empty() {
            cells.resize(self.grid.width().max(first), String::new());
        }

        if row > self.row_count() {
            return Err(Error::OutOfRange(format!("row out of range: {row}")));
        }
        if let Some(name) = name {
            cells[self.options.labels.row_name_idx as usize] = name.to_string();
        }

        // a table without its header rows gets them first
        self.grid.grow_to(self.row_offset(), 0);
        self.grid.insert_row(row + self.row_offset(), cells);
        self.rebuild_labels();
        Ok(())
    }

    /// Insert a column before logical column `column`; `column == column_count()`
    /// appends. Rows are added if `values` is longer than the table.
    ///
    /// Fails without changing anything if some row is too short to insert into.
    pub fn insert_column<T: CellValue>(
        &mut self,
        column: usize,
        values: &[T],
        name: Option<&str>,
    ) -> Result<()> {
        if name.is_some() {
            self.column_header_row()?;
        }
        let converter = self.options.converter;
        let first = self.row_offset();
        let mut cells = vec![String::new(); first];
        cells.extend(values.iter().map(|value| value.to_cell(&converter)));
        if values.is_empty() {
            cells.resize(self.grid.row_count().max(first), String::new());
        }
        if let Some(name) = name {
            cells[self.options.labels.column_name_idx as usize] = name.to_string();
        }

        let out_of_range = |raw_row: usize| {
            Error::OutOfRange(format!("column out of range: {column} (on row {raw_row})"))
        };
        let raw_column = self.raw_column(column).ok_or_else(|| out_of_range(0))?;
        let new_width = self.grid.width().max(self.column_offset());
        let short_row = self
            .grid
            .rows()
            .iter()
            .position(|row| row.len() < raw_column)
            .or_else(|| {
                (cells.len() > self.grid.row_count() && new_width < raw_column)
                    .then_some(self.grid.row_count())
            });
        if let Some(raw_row) = short_row {
            return Err(out_of_range(raw_row));
        }

        if cells.len() > self.grid.row_count() {
            self.grid.grow_to(cells.len(), new_width);
        }
        self.grid.insert_column(raw_column, cells);
        self.rebuild_labels();
        Ok(())
    }

    pub fn remove_row(&mut self, row: impl Key) -> Result<()> {
        let row = row.row_in(&self.labels)?;
        let Some(raw_row) = self.raw_row(row).filter(|&raw| raw < self.grid.row_count()) else {
            return Err(Error::OutOfRange(format!("row out of range: {row}")));
        };
        self.grid.remove_row(raw_row);
        self.rebuild_labels();
        Ok(())
    }

    /// Remove a column from every row.
    ///
    /// Fails without changing anything if some row does not reach the column.
    pub fn remove_column(&mut self, column: impl Key) -> Result<()> {
        let column = column.column_in(&self.labels)?;
        let raw_column = self.raw_column(column);
        if let Some(raw_row) = self
            .grid
            .rows()
            .iter()
            .position(|row| raw_column.is_none_or(|raw| row.len() <= raw))
        {
            return Err(Error::OutOfRange(format!(
                "column out of range: {column} (on row {raw_row})"
            )));
        }
        if let Some(raw_column) = raw_column {
            self.grid.remove_column(raw_column);
        }
        self.rebuild_labels();
        Ok(())
    }

    fn column_header_row(&self) -> Result<usize> {
        let idx = self.options.labels.column_name_idx;
        if idx < 0 {
            return Err(Error::OutOfRange(format!("column name row index < 0: {idx}")));
        }
        Ok(idx as usize)
    }

    fn row_header_column(&self) -> Result<usize> {
        let idx = self.options.labels.row_name_idx;
        if idx < 0 {
            return Err(Error::OutOfRange(format!("row name column index < 0: {idx}")));
        }
        Ok(idx as usize)
    }
}
