use crate::encode::primitives::{needs_quotes, quote_into};
use crate::options::SeparatorParams;

/// Accumulates delimited rows into a single UTF-8 string.
pub struct RowWriter {
    out: String,
    params: SeparatorParams,
}

impl RowWriter {
    pub fn with_capacity(params: SeparatorParams, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            params,
        }
    }

    fn write_cell(&mut self, cell: &str) {
        if needs_quotes(cell, &self.params) {
            quote_into(&mut self.out, cell, self.params.quote_char);
        } else {
            self.out.push_str(cell);
        }
    }

    pub fn row<S: AsRef<str>>(&mut self, cells: &[S]) {
        let separator = char::from(self.params.separator);
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                self.out.push(separator);
            }
            self.write_cell(cell.as_ref());
        }
        self.out.push_str(if self.params.has_cr { "\r\n" } else { "\n" });
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
