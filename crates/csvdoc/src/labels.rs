//! Column and row label lookup, derived from the header row and column.

use std::collections::HashMap;

use crate::grid::Grid;
use crate::options::LabelParams;

/// Maps label text to the raw position of its column or row.
///
/// This is a cache over the grid: it is rebuilt after every structural change
/// and never consulted for anything the grid itself can answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    params: LabelParams,
    columns: HashMap<String, usize>,
    rows: HashMap<String, usize>,
}

impl LabelIndex {
    pub fn build(grid: &Grid, params: LabelParams) -> Self {
        let mut index = Self {
            params,
            columns: HashMap::new(),
            rows: HashMap::new(),
        };

        if params.has_column_labels() {
            if let Some(header) = grid.row(params.column_name_idx as usize) {
                for (raw, name) in header.iter().enumerate() {
                    index.columns.insert(name.clone(), raw);
                }
            }
        }

        if params.has_row_labels() && grid.row_count() > params.row_offset() {
            let column = params.row_name_idx as usize;
            for (raw, row) in grid.rows().iter().enumerate() {
                if let Some(name) = row.get(column) {
                    index.rows.insert(name.clone(), raw);
                }
            }
        }

        index
    }

    /// Logical column index of `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if !self.params.has_column_labels() {
            return None;
        }
        let raw = *self.columns.get(name)?;
        raw.checked_sub(self.params.column_offset())
    }

    /// Logical row index of `name`.
    pub fn row_index(&self, name: &str) -> Option<usize> {
        if !self.params.has_row_labels() {
            return None;
        }
        let raw = *self.rows.get(name)?;
        raw.checked_sub(self.params.row_offset())
    }

    /// Point `name` at raw column `raw`, dropping whatever label pointed there before.
    pub(crate) fn rename_column(&mut self, raw: usize, name: &str) {
        self.columns.retain(|_, pos| *pos != raw);
        self.columns.insert(name.to_string(), raw);
    }

    pub(crate) fn rename_row(&mut self, raw: usize, name: &str) {
        self.rows.retain(|_, pos| *pos != raw);
        self.rows.insert(name.to_string(), raw);
    }
}
