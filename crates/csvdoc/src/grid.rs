//! Owned row-major table of raw cells.
//!
//! Indices here are raw positions: header rows and columns count like any
//! other. Translation from logical indices happens in the document layer.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Grow to at least `rows` x `columns` and pad every row to a common width.
    /// Returns whether anything changed.
    pub fn grow_to(&mut self, rows: usize, columns: usize) -> bool {
        let width = self.width().max(columns);
        let mut changed = false;
        if self.rows.len() < rows {
            self.rows.resize_with(rows, Vec::new);
            changed = true;
        }
        for row in &mut self.rows {
            if row.len() < width {
                row.resize_with(width, String::new);
                changed = true;
            }
        }
        changed
    }

    /// Store `text` at (`column`, `row`), growing the grid as needed.
    /// Returns whether the grid grew.
    pub fn set(&mut self, column: usize, row: usize, text: String) -> bool {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = text;
            return false;
        }
        self.grow_to(row + 1, column + 1);
        self.rows[row][column] = text;
        true
    }

    pub fn insert_row(&mut self, at: usize, row: Vec<String>) {
        self.rows.insert(at, row);
        self.grow_to(0, 0);
    }

    pub fn remove_row(&mut self, at: usize) -> Vec<String> {
        self.rows.remove(at)
    }

    /// Insert one cell per row at `at`. Rows shorter than `at` are padded;
    /// missing cells are empty.
    pub fn insert_column(&mut self, at: usize, cells: Vec<String>) {
        let mut cells = cells.into_iter();
        for row in &mut self.rows {
            if row.len() < at {
                row.resize_with(at, String::new);
            }
            row.insert(at, cells.next().unwrap_or_default());
        }
        self.grow_to(0, 0);
    }

    /// Remove the cell at `at` from every row that has one.
    pub fn remove_column(&mut self, at: usize) {
        for row in &mut self.rows {
            if at < row.len() {
                row.remove(at);
            }
        }
    }
}
