//! Shared numeric parsing/formatting rules for the data operators and the
//! temp-variable store: `sum`/`avg`/`min`/`max`/`inc` all agree on what
//! counts as a number and how a number is written back into a cell.

/// Parses `s` as a floating-point number, succeeding only if the whole byte
/// string is consumed (no trailing garbage).
pub fn parse_numeric(s: &[u8]) -> Option<f64> {
    std::str::from_utf8(s).ok()?.parse::<f64>().ok()
}

/// Strips one matching pair of surrounding quotes (single or double), as
/// `min`/`max` do before parsing a cell's content.
pub fn trim_one_quote_pair(s: &[u8]) -> &[u8] {
    if s.len() >= 2 {
        let (first, last) = (s[0], s[s.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Formats a number the way the data operators write results back: integers
/// without a decimal point, non-integers in the shortest round-tripping
/// general form. Rust's `f64` `Display` already produces the shortest
/// round-trip form and omits `.0` for whole values, so this is a direct
/// wrapper, not a reimplementation of `%g`.
pub fn format_numeric(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_whole_strings() {
        assert_eq!(parse_numeric(b"42"), Some(42.0));
        assert_eq!(parse_numeric(b"3.5"), Some(3.5));
        assert_eq!(parse_numeric(b"3.5abc"), None);
        assert_eq!(parse_numeric(b""), None);
    }

    #[test]
    fn trims_one_matching_quote_pair() {
        assert_eq!(trim_one_quote_pair(b"\"42\""), b"42");
        assert_eq!(trim_one_quote_pair(b"'42'"), b"42");
        assert_eq!(trim_one_quote_pair(b"\"42"), b"\"42");
        assert_eq!(trim_one_quote_pair(b"42"), b"42");
    }

    #[test]
    fn formats_integers_without_decimal_point() {
        assert_eq!(format_numeric(21.0), "21");
        assert_eq!(format_numeric(3.5), "3.5");
    }
}
