//! Text <-> number boundary for operands.
//!
//! # Responsibility
//! - Parse operand text the way the display accumulates it.
//! - Format computed values into the canonical display string.
//!
//! # Invariants
//! - This is the only module that converts between operand text and `f64`.
//! - Formatting never fails; non-finite values render as `NaN`, `Infinity`
//!   or `-Infinity`.
//! - Formatted values re-parse to the same `f64`.

/// Decimal exponent (as the position of the decimal point) at or above which
/// formatting switches to scientific notation.
const MAX_PLAIN_POINT_POSITION: i32 = 21;
/// Point positions at or below this value switch to scientific notation.
const MIN_PLAIN_POINT_POSITION: i32 = -6;

const INFINITY_LITERAL: &str = "Infinity";

/// Parses the longest numeric prefix of `text`.
///
/// Accepts an optional sign, digits with at most one `.`, and an optional
/// exponent, or the literal `Infinity`. Trailing characters are ignored
/// (`"12abc"` is `12`, `"5."` is `5`). Text without a numeric prefix is NaN.
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_in = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with(INFINITY_LITERAL) {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = digits_in(end);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_in(end + 1);
        end += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_digits = digits_in(cursor);
        if exponent_digits > 0 {
            end = cursor + exponent_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a computed value as the shortest decimal string that round-trips.
///
/// Whole numbers carry no fractional part (`20`, not `20.0`), negative zero
/// renders as `0`, and magnitudes outside `[1e-7, 1e21)` use scientific
/// notation with an explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_LITERAL.to_string()
        } else {
            format!("-{INFINITY_LITERAL}")
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let digits = mantissa.replace('.', "");
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{sign}{}", layout_digits(&digits, exponent + 1))
}

/// Places `digits` around a decimal point at `point` (digits before the point).
fn layout_digits(digits: &str, point: i32) -> String {
    let digit_count = digits.len() as i32;

    if digit_count <= point && point <= MAX_PLAIN_POINT_POSITION {
        let zeros = "0".repeat((point - digit_count) as usize);
        return format!("{digits}{zeros}");
    }
    if 0 < point && point <= MAX_PLAIN_POINT_POSITION {
        let (whole, fraction) = digits.split_at(point as usize);
        return format!("{whole}.{fraction}");
    }
    if MIN_PLAIN_POINT_POSITION < point && point <= 0 {
        let zeros = "0".repeat((-point) as usize);
        return format!("0.{zeros}{digits}");
    }

    let exponent = point - 1;
    let exponent_sign = if exponent >= 0 { "+" } else { "-" };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{exponent_sign}{}", exponent.abs())
    } else {
        format!("{lead}.{rest}e{exponent_sign}{}", exponent.abs())
    }
}
