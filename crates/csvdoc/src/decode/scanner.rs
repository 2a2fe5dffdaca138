//! Byte-level tokenizer turning delimited text into rows of cells.
//!
//! The scanner is fed arbitrary chunks; all state that must survive a chunk
//! boundary (open quote, partial cell, partial row) lives in [`Scanner`].

use crate::options::{LineReaderParams, SeparatorParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
    /// Inside a comment line that is being dropped.
    Comment,
}

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub rows: Vec<Vec<String>>,
    pub cr_count: usize,
    pub lf_count: usize,
}

impl Scanned {
    /// CR/LF when at least half of the linebreaks carry a CR.
    pub fn has_cr(&self) -> bool {
        self.cr_count > self.lf_count / 2
    }
}

pub struct Scanner {
    separator: SeparatorParams,
    line_reader: LineReaderParams,
    state: State,
    cell: Vec<u8>,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
    cr_count: usize,
    lf_count: usize,
    at_line_start: bool,
    /// Whether the current line had any byte besides its linebreak.
    line_has_bytes: bool,
}

impl Scanner {
    pub fn new(separator: SeparatorParams, line_reader: LineReaderParams) -> Self {
        Self {
            separator,
            line_reader,
            state: State::Unquoted,
            cell: Vec::new(),
            row: Vec::new(),
            rows: Vec::new(),
            cr_count: 0,
            lf_count: 0,
            at_line_start: true,
            line_has_bytes: false,
        }
    }

    pub fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            self.push_byte(byte);
        }
    }

    /// Flush a trailing line without linebreak and hand out the grid.
    pub fn finish(mut self) -> Scanned {
        if self.state != State::Comment && (!self.cell.is_empty() || !self.row.is_empty()) {
            self.end_cell();
            self.end_row();
        }
        Scanned {
            rows: self.rows,
            cr_count: self.cr_count,
            lf_count: self.lf_count,
        }
    }

    fn push_byte(&mut self, byte: u8) {
        if self.state == State::Comment {
            match byte {
                b'\r' => self.cr_count += 1,
                b'\n' => {
                    self.lf_count += 1;
                    self.state = State::Unquoted;
                    self.at_line_start = true;
                }
                _ => {}
            }
            return;
        }

        if self.at_line_start {
            self.at_line_start = false;
            if self.line_reader.skip_comment_lines && byte == self.line_reader.comment_prefix {
                self.state = State::Comment;
                return;
            }
        }

        if !matches!(byte, b'\r' | b'\n') {
            self.line_has_bytes = true;
        }

        let quoted = self.state == State::Quoted;
        let sep = self.separator.separator;
        let quote = self.separator.quote_char;
        match byte {
            b if b == quote => {
                if self.quote_toggles() {
                    self.state = if quoted { State::Unquoted } else { State::Quoted };
                }
                self.cell.push(b);
            }
            b if b == sep => {
                if quoted {
                    self.cell.push(b);
                } else {
                    self.end_cell();
                }
            }
            b'\r' => {
                if quoted && self.separator.quoted_linebreaks {
                    self.cell.push(byte);
                } else {
                    self.cr_count += 1;
                }
            }
            b'\n' => {
                if quoted && self.separator.quoted_linebreaks {
                    self.cell.push(byte);
                } else {
                    self.lf_count += 1;
                    self.end_cell();
                    self.end_row();
                    // quoting never spans a structural linebreak
                    self.state = State::Unquoted;
                    self.at_line_start = true;
                }
            }
            b => self.cell.push(b),
        }
    }

    fn quote_toggles(&self) -> bool {
        let quote = self.separator.quote_char;
        match self.cell.first() {
            None => true,
            Some(&first) if first == quote => true,
            Some(_) => {
                self.separator.trim
                    && self
                        .cell
                        .iter()
                        .take_while(|&&b| b != quote)
                        .all(|&b| is_blank(b))
            }
        }
    }

    fn end_cell(&mut self) {
        let raw = core::mem::take(&mut self.cell);
        let mut bytes: &[u8] = &raw;
        if self.separator.trim {
            bytes = trim_blank(bytes);
        }
        let text = if self.separator.auto_quote {
            match unquote(bytes, self.separator.quote_char) {
                Some(inner) => into_text(&inner),
                None => into_text(bytes),
            }
        } else {
            into_text(bytes)
        };
        self.row.push(text);
    }

    fn end_row(&mut self) {
        let row = core::mem::take(&mut self.row);
        let blank = !core::mem::take(&mut self.line_has_bytes);
        // `""` dequotes to an empty cell but is not a blank line
        if self.line_reader.skip_empty_lines && blank {
            return;
        }
        self.rows.push(row);
    }
}

/// Tokenize a complete in-memory input.
pub fn scan(input: &[u8], separator: SeparatorParams, line_reader: LineReaderParams) -> Scanned {
    let mut scanner = Scanner::new(separator, line_reader);
    scanner.feed(input);
    scanner.finish()
}

#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

fn trim_blank(bytes: &[u8]) -> &[u8] {
    let mut start = 0usize;
    let mut end = bytes.len();
    while start < end && is_blank(bytes[start]) {
        start += 1;
    }
    while end > start && is_blank(bytes[end - 1]) {
        end -= 1;
    }
    &bytes[start..end]
}

/// Strip wrapping quote chars and collapse doubled ones. `None` if the cell is not quoted.
fn unquote(bytes: &[u8], quote: u8) -> Option<Vec<u8>> {
    if bytes.len() < 2 || bytes[0] != quote || bytes[bytes.len() - 1] != quote {
        return None;
    }
    let inner = &bytes[1..bytes.len() - 1];
    let mut out = Vec::with_capacity(inner.len());
    let mut i = 0usize;
    while i < inner.len() {
        out.push(inner[i]);
        if inner[i] == quote && inner.get(i + 1) == Some(&quote) {
            i += 2;
        } else {
            i += 1;
        }
    }
    Some(out)
}

fn into_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
