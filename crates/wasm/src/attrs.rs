//! Parsing of the `data-*` attributes the page markup carries.

/// Leading integer of `raw`, the way the page's counters were always read:
/// surrounding whitespace and trailing junk (`"15+"`) are tolerated.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integers() {
        assert_eq!(parse_leading_int("15"), Some(15));
        assert_eq!(parse_leading_int(" 8+ "), Some(8));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("2.5k"), Some(2));
        assert_eq!(parse_leading_int("many"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
