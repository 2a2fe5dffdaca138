//! Read pipeline: byte-order-mark sniffing, chunked reads, tokenizing.

pub mod scanner;

use std::io::{self, Read};

use crate::Result;
use crate::encoding::{self, TextEncoding};
use crate::options::{LineReaderParams, SeparatorParams};

use self::scanner::Scanner;

/// Bytes requested from the reader per call.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// A fully tokenized input, not yet attached to a document.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub rows: Vec<Vec<String>>,
    pub has_cr: bool,
    pub encoding: TextEncoding,
}

/// Read `reader` to the end and tokenize it.
///
/// UTF-8 input (with or without BOM) is tokenized chunk by chunk; UTF-16 input
/// is transcoded in one piece first.
pub fn read_rows<R: Read>(
    mut reader: R,
    separator: SeparatorParams,
    line_reader: LineReaderParams,
) -> Result<Decoded> {
    separator.validate()?;
    line_reader.validate()?;
    let mut buf = vec![0u8; CHUNK_SIZE];

    // the BOM may arrive split over several short reads
    let mut filled = 0usize;
    while filled < 3 {
        let n = read_chunk(&mut reader, &mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    let (encoding, bom_len) = TextEncoding::detect(&buf[..filled]);

    let mut scanner = Scanner::new(separator, line_reader);
    let mut chunks = 1usize;
    if encoding.is_utf16() {
        let mut raw = buf[bom_len..filled].to_vec();
        reader.read_to_end(&mut raw)?;
        let utf8 = encoding::decode_utf16(&raw, encoding == TextEncoding::Utf16Le);
        tracing::trace!(bytes = raw.len(), "transcoded utf-16 input");
        scanner.feed(&utf8);
    } else {
        scanner.feed(&buf[bom_len..filled]);
        loop {
            let n = read_chunk(&mut reader, &mut buf)?;
            if n == 0 {
                break;
            }
            tracing::trace!(chunk = chunks, bytes = n, "read chunk");
            scanner.feed(&buf[..n]);
            chunks += 1;
        }
    }

    let scanned = scanner.finish();
    let has_cr = scanned.has_cr();
    tracing::debug!(
        rows = scanned.rows.len(),
        ?encoding,
        has_cr,
        chunks,
        "tokenized input"
    );
    Ok(Decoded {
        rows: scanned.rows,
        has_cr,
        encoding,
    })
}

fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
