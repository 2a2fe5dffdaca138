//! Write pipeline: quoting, row assembly and output encoding.

pub mod primitives;
pub mod writer;

use crate::encoding::TextEncoding;
use crate::options::SeparatorParams;

/// Serialize `rows` as delimited text in the given output encoding.
pub fn encode_rows(
    rows: &[Vec<String>],
    params: &SeparatorParams,
    encoding: TextEncoding,
) -> Vec<u8> {
    let estimate: usize = rows
        .iter()
        .map(|row| row.iter().map(|c| c.len() + 1).sum::<usize>() + 1)
        .sum();
    let mut w = writer::RowWriter::with_capacity(*params, estimate);
    for row in rows {
        w.row(row);
    }
    encoding.encode(&w.into_string())
}
