//! Display text <-> number conversion

use crate::core::{CalcError, CalcResult};

/// Parses the display text as a number.
///
/// Only literal numeric text is accepted: digits, a decimal point, a
/// leading minus and an exponent. A trailing decimal point is allowed
/// (`"5."` parses as 5). Anything else, including the error marker and
/// a lone `"-"`, is rejected.
pub fn parse_display(text: &str) -> CalcResult<f64> {
    let literal = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !literal {
        return Err(CalcError::Unparsable(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::Unparsable(text.to_string()))
}

/// Formats a number as plain text for the display.
///
/// Uses the shortest digit string that round-trips. Magnitudes at or
/// above 1e21 or below 1e-6 switch to exponent form (`1e+21`, `5e-7`).
/// Negative zero prints as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let magnitude = (n - 1).abs();
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{magnitude}")
        } else {
            format!("{lead}.{rest}e{sign}{magnitude}")
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
