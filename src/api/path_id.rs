//! Lenient parsing of the `:id` path segment.

use crate::store::TeaId;
use std::fmt;

/// Identifier taken from a request path.
///
/// Parsing reads an optional sign followed by the leading run of digits and ignores whatever
/// follows, so `"12abc"` is 12. A `0x`/`0X` prefix switches to hexadecimal (`"0x1f"` is 31).
/// A segment without leading digits is not a number and matches no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathId {
    /// Normalized decimal text of the parsed integer (no leading zeros, `-` only when non-zero).
    Number(String),
    /// The segment carried no leading digits.
    NotANumber,
}

impl PathId {
    /// Parse a raw path segment. Never fails.
    pub fn parse(segment: &str) -> Self {
        let trimmed = segment.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            Some(hex) => match hex_to_decimal(hex) {
                Some(decimal) => decimal,
                None => return Self::NotANumber,
            },
            None => {
                let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
                if digit_count == 0 {
                    return Self::NotANumber;
                }
                let digits = rest[..digit_count].trim_start_matches('0');
                let digits = if digits.is_empty() { "0" } else { digits };
                digits.to_string()
            }
        };

        if negative && digits != "0" {
            Self::Number(format!("-{digits}"))
        } else {
            Self::Number(digits)
        }
    }

    /// Store identifier this path refers to, if it could name any record at all.
    pub fn store_id(&self) -> Option<TeaId> {
        match self {
            Self::Number(text) => text.parse().ok(),
            Self::NotANumber => None,
        }
    }
}

/// Decimal text of the leading hex digits, or `None` when there are none.
///
/// Values wider than 128 bits are treated as not-a-number.
fn hex_to_decimal(text: &str) -> Option<String> {
    let digit_count = text.bytes().take_while(u8::is_ascii_hexdigit).count();
    if digit_count == 0 {
        return None;
    }
    let digits = text[..digit_count].trim_start_matches('0');
    if digits.is_empty() {
        return Some("0".to_string());
    }
    u128::from_str_radix(digits, 16)
        .ok()
        .map(|value| value.to_string())
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_digits_only() {
        assert_eq!(PathId::parse("12abc").store_id(), Some(12));
        assert_eq!(PathId::parse("7.9").store_id(), Some(7));
        assert_eq!(PathId::parse("  +3").store_id(), Some(3));
        assert_eq!(PathId::parse("007").to_string(), "7");
    }

    #[test]
    fn non_numeric_segments_are_nan() {
        let id = PathId::parse("abc");
        assert_eq!(id, PathId::NotANumber);
        assert_eq!(id.store_id(), None);
        assert_eq!(id.to_string(), "NaN");
        assert_eq!(PathId::parse("").to_string(), "NaN");
        assert_eq!(PathId::parse("-").to_string(), "NaN");
    }

    #[test]
    fn hex_prefix_is_honoured() {
        assert_eq!(PathId::parse("0x2").store_id(), Some(2));
        assert_eq!(PathId::parse("0X1fzz").store_id(), Some(31));
        assert_eq!(PathId::parse("-0x2").to_string(), "-2");
        assert_eq!(PathId::parse("0x"), PathId::NotANumber);
        assert_eq!(PathId::parse("0xg"), PathId::NotANumber);
        assert_eq!(PathId::parse("0x000").to_string(), "0");
    }

    #[test]
    fn negative_and_oversized_ids_match_nothing() {
        let negative = PathId::parse("-4");
        assert_eq!(negative.to_string(), "-4");
        assert_eq!(negative.store_id(), None);
        assert_eq!(PathId::parse("-0").to_string(), "0");

        let huge = PathId::parse("99999999999999999999999");
        assert_eq!(huge.to_string(), "99999999999999999999999");
        assert_eq!(huge.store_id(), None);
    }
}
