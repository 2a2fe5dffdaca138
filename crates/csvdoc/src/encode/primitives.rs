use crate::options::SeparatorParams;

/// Whether `cell` must be wrapped in quote chars to read back unchanged.
pub fn needs_quotes(cell: &str, params: &SeparatorParams) -> bool {
    if !params.auto_quote {
        return false;
    }
    cell.bytes().any(|b| {
        b == params.separator || b == params.quote_char || matches!(b, b' ' | b'\r' | b'\n')
    })
}

/// Append `cell` wrapped in `quote`, doubling any quote inside it.
pub fn quote_into(out: &mut String, cell: &str, quote: u8) {
    let quote = char::from(quote);
    out.push(quote);
    for ch in cell.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}
