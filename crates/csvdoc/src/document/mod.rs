//! The in-memory document: grid, labels, configuration and I/O.

mod access;
mod structure;

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::decode::{self, Decoded};
use crate::encode;
use crate::encoding::TextEncoding;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::labels::LabelIndex;
use crate::options::{ConverterParams, LabelParams, Options, SeparatorParams};

/// A delimited-text table held in memory.
///
/// Cells are addressed by logical indices that skip the configured header row
/// and header column, or by the labels those headers contain.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    options: Options,
    encoding: TextEncoding,
    grid: Grid,
    labels: LabelIndex,
}

impl Document {
    /// An empty document. Line endings come from `options.separator.has_cr`.
    pub fn new(options: Options) -> Self {
        Self {
            path: None,
            options,
            encoding: TextEncoding::default(),
            grid: Grid::new(),
            labels: LabelIndex::build(&Grid::new(), options.labels),
        }
    }

    /// Load the file at `path`. The path is remembered for [`Document::save`].
    pub fn open<P: AsRef<Path>>(path: P, options: Options) -> Result<Self> {
        let mut doc = Self::new(options);
        doc.load(path)?;
        Ok(doc)
    }

    pub fn from_reader<R: Read>(reader: R, options: Options) -> Result<Self> {
        let mut doc = Self::new(options);
        doc.load_from_reader(reader)?;
        Ok(doc)
    }

    /// Replace the contents with the file at `path`.
    ///
    /// On error the document is left as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let decoded = decode::read_rows(file, self.options.separator, self.options.line_reader)?;
        self.commit(decoded);
        self.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), rows = self.grid.row_count(), "loaded document");
        Ok(())
    }

    /// Replace the contents with everything `reader` yields.
    ///
    /// On error the document is left as it was.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        let decoded = decode::read_rows(reader, self.options.separator, self.options.line_reader)?;
        self.commit(decoded);
        Ok(())
    }

    fn commit(&mut self, decoded: Decoded) {
        self.grid = Grid::from_rows(decoded.rows);
        self.options.separator.has_cr = decoded.has_cr;
        self.encoding = decoded.encoding;
        self.rebuild_labels();
    }

    /// Write back to the path the document was opened from.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::NoPath)?;
        self.save_as(path)
    }

    /// Write to `path`. The remembered path is not changed.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        let written = self.write_out(&mut file)?;
        file.flush()?;
        tracing::debug!(path = %path.display(), bytes = written, "saved document");
        Ok(())
    }

    pub fn save_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let written = self.write_out(&mut writer)?;
        tracing::debug!(bytes = written, "saved document to writer");
        Ok(())
    }

    fn write_out<W: Write>(&self, writer: &mut W) -> Result<usize> {
        self.options.separator.validate()?;
        let bytes = encode::encode_rows(self.grid.rows(), &self.options.separator, self.encoding);
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Drop all cells. Configuration, path and output encoding are kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.rebuild_labels();
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Switch which row and column hold labels. Cells are not moved.
    pub fn set_label_params(&mut self, labels: LabelParams) {
        self.options.labels = labels;
        self.rebuild_labels();
    }

    /// Parameters used by `save`. Changing the separator does not re-tokenize
    /// what was already loaded.
    pub fn set_separator_params(&mut self, separator: SeparatorParams) {
        self.options.separator = separator;
    }

    pub fn set_converter_params(&mut self, converter: ConverterParams) {
        self.options.converter = converter;
    }

    /// Encoding detected on load, used when saving.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    /// Raw rows, header row and column included.
    pub fn raw_rows(&self) -> &[Vec<String>] {
        self.grid.rows()
    }

    fn rebuild_labels(&mut self) {
        self.labels = LabelIndex::build(&self.grid, self.options.labels);
    }

    fn column_offset(&self) -> usize {
        self.options.labels.column_offset()
    }

    fn row_offset(&self) -> usize {
        self.options.labels.row_offset()
    }

    /// Raw column of logical `column`, `None` if it is not addressable.
    fn raw_column(&self, column: usize) -> Option<usize> {
        raw_position(column, self.column_offset())
    }

    /// Raw row of logical `row`, `None` if it is not addressable.
    fn raw_row(&self, row: usize) -> Option<usize> {
        raw_position(row, self.row_offset())
    }
}

/// `index + offset`, keeping one past the result representable so callers can
/// grow the grid to it.
fn raw_position(index: usize, offset: usize) -> Option<usize> {
    index.checked_add(offset).filter(|&raw| raw < usize::MAX)
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
