//! Byte-order-mark detection and UTF-16 transcoding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Encoding of the bytes a document was read from, reused when it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextEncoding {
    /// UTF-8 (or unknown 8-bit) without a byte-order mark.
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Classify the leading bytes of a stream. Returns the encoding and how many
    /// bytes of `head` belong to the byte-order mark.
    pub fn detect(head: &[u8]) -> (TextEncoding, usize) {
        if head.starts_with(&UTF8_BOM) {
            (TextEncoding::Utf8Bom, UTF8_BOM.len())
        } else if head.starts_with(&UTF16_LE_BOM) {
            (TextEncoding::Utf16Le, UTF16_LE_BOM.len())
        } else if head.starts_with(&UTF16_BE_BOM) {
            (TextEncoding::Utf16Be, UTF16_BE_BOM.len())
        } else {
            (TextEncoding::Utf8, 0)
        }
    }

    pub fn bom(self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => &[],
            TextEncoding::Utf8Bom => &UTF8_BOM,
            TextEncoding::Utf16Le => &UTF16_LE_BOM,
            TextEncoding::Utf16Be => &UTF16_BE_BOM,
        }
    }

    pub fn is_utf16(self) -> bool {
        matches!(self, TextEncoding::Utf16Le | TextEncoding::Utf16Be)
    }

    /// Encode UTF-8 text for output, prefixed with this encoding's byte-order mark.
    pub fn encode(self, text: &str) -> Vec<u8> {
        let bom = self.bom();
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
                let mut out = Vec::with_capacity(bom.len() + text.len());
                out.extend_from_slice(bom);
                out.extend_from_slice(text.as_bytes());
                out
            }
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                let little_endian = self == TextEncoding::Utf16Le;
                let mut out = Vec::with_capacity(bom.len() + text.len() * 2);
                out.extend_from_slice(bom);
                for unit in text.encode_utf16() {
                    let bytes = if little_endian {
                        unit.to_le_bytes()
                    } else {
                        unit.to_be_bytes()
                    };
                    out.extend_from_slice(&bytes);
                }
                out
            }
        }
    }
}

/// Decode UTF-16 code units (BOM already stripped) to UTF-8 bytes.
///
/// Unpaired surrogates become U+FFFD and a trailing odd byte is dropped.
pub fn decode_utf16(bytes: &[u8], little_endian: bool) -> Vec<u8> {
    let units = bytes.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if little_endian {
            u16::from_le_bytes(pair)
        } else {
            u16::from_be_bytes(pair)
        }
    });
    let mut out = String::with_capacity(bytes.len() / 2);
    for ch in char::decode_utf16(units) {
        out.push(ch.unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    out.into_bytes()
}
