// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

/// Converts the longest numeric prefix of a byte slice into a double.
///
/// Returns the parsed value and the number of bytes consumed; a consumed
/// count of zero signals "no valid number at this position". The value still
/// accompanies a zero-length parse — the grammar's single-dot edge case
/// relies on it.
pub trait NumberConverter {
    fn convert(&self, text: &[u8]) -> (f64, usize);
}

/// Default converter: the longest prefix of the form
/// `[+-] digits [. digits] [eE [+-] digits]` (a leading `.digits` also
/// counts), requiring at least one mantissa digit. An exponent marker without
/// digits after it is not consumed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalConverter;

fn digit_run(text: &[u8], from: usize) -> usize {
    text[from..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn numeric_prefix_len(text: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(text.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_digits = digit_run(text, pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if text.get(pos) == Some(&b'.') {
        frac_digits = digit_run(text, pos + 1);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(text.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(text.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = digit_run(text, exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

impl NumberConverter for DecimalConverter {
    fn convert(&self, text: &[u8]) -> (f64, usize) {
        let length = numeric_prefix_len(text);
        if length == 0 {
            return (0.0, 0);
        }
        // The prefix is pure ASCII by construction.
        let prefix = match core::str::from_utf8(&text[..length]) {
            Ok(prefix) => prefix,
            Err(_) => return (0.0, 0),
        };
        match f64::from_str(prefix) {
            Ok(value) => (value, length),
            Err(_) => (0.0, 0),
        }
    }
}

impl<N: NumberConverter + ?Sized> NumberConverter for &N {
    fn convert(&self, text: &[u8]) -> (f64, usize) {
        (**self).convert(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> (f64, usize) {
        DecimalConverter.convert(text.as_bytes())
    }

    #[test]
    fn test_integers_and_fractions() {
        assert_eq!(convert("1"), (1.0, 1));
        assert_eq!(convert("1.5"), (1.5, 3));
        assert_eq!(convert("42,"), (42.0, 2));
        assert_eq!(convert("+4"), (4.0, 2));
    }

    #[test]
    fn test_signed_exponent() {
        assert_eq!(convert("-2.3e10"), (-2.3e10, 7));
        assert_eq!(convert("1e-3"), (1e-3, 4));
    }

    #[test]
    fn test_dangling_exponent_marker_not_consumed() {
        assert_eq!(convert("1e"), (1.0, 1));
        assert_eq!(convert("7E+"), (7.0, 1));
    }

    #[test]
    fn test_leading_and_trailing_dot() {
        assert_eq!(convert(".5"), (0.5, 2));
        assert_eq!(convert("1."), (1.0, 2));
    }

    #[test]
    fn test_no_number_consumes_nothing() {
        assert_eq!(convert("."), (0.0, 0));
        assert_eq!(convert("-"), (0.0, 0));
        assert_eq!(convert("abc"), (0.0, 0));
        assert_eq!(convert(""), (0.0, 0));
    }

    #[test]
    fn test_stops_at_first_non_numeric_byte() {
        assert_eq!(convert("1.2.3"), (1.2, 3));
        assert_eq!(convert("0x10"), (0.0, 1));
    }
}
