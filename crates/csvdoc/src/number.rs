use core::str::FromStr;

use crate::options::ConverterParams;

/// Format a float in shortest round-trip form, without a trailing `.0`,
/// using the configured decimal separator.
pub(crate) fn format_float<F: ryu::Float>(value: F, params: &ConverterParams) -> String {
    let mut buf = ryu::Buffer::new();
    let raw = buf.format(value);
    let body = raw.strip_suffix(".0").unwrap_or(raw);
    let decimal = params.decimal_separator();
    if decimal == '.' {
        String::from(body)
    } else {
        body.replace('.', &decimal.to_string())
    }
}

/// Parse a float cell, honoring the locale's decimal and grouping separators.
pub(crate) fn parse_float<F: FromStr>(text: &str, params: &ConverterParams) -> Option<F> {
    let text = trim_ascii(text);
    if text.is_empty() {
        return None;
    }
    let decimal = params.decimal_separator();
    let grouping = if params.numeric_locale {
        params.locale.grouping_separator
    } else {
        None
    };
    if decimal == '.' && grouping.is_none() {
        return text.parse().ok();
    }

    let mut normalized = String::with_capacity(text.len());
    for ch in text.chars() {
        if Some(ch) == grouping {
            continue;
        }
        if ch == decimal {
            normalized.push('.');
        } else if ch == '.' {
            // a C decimal point is not a separator in this locale
            return None;
        } else {
            normalized.push(ch);
        }
    }
    normalized.parse().ok()
}

pub(crate) fn parse_integer<I: FromStr>(text: &str) -> Option<I> {
    let text = trim_ascii(text);
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}
