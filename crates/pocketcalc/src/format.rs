//! Locale-aware rendering of the display text
//!
//! Works on the engine's display string directly, so a half-typed
//! number such as `"1234."` keeps its trailing separator and every typed
//! fraction digit. The engine string itself is never modified.

use serde::{Deserialize, Serialize};

use crate::core::ERROR_MARKER;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Engine text as-is
    Raw,
    /// `1,234.5`
    #[default]
    EnUs,
    /// `1.234,5`
    DeDe,
    /// `١٬٢٣٤٫٥` (Arabic-Indic digits)
    ArEg,
}

impl Locale {
    /// All locales
    pub const ALL: [Self; 4] = [Self::Raw, Self::EnUs, Self::DeDe, Self::ArEg];

    /// BCP 47 tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::ArEg => "ar-EG",
        }
    }

    /// Separator and glyph table for this locale
    #[must_use]
    pub const fn symbols(self) -> NumberSymbols {
        match self {
            Self::Raw => NumberSymbols {
                group: None,
                decimal: '.',
                zero: '0',
                error: ERROR_MARKER,
            },
            Self::EnUs => NumberSymbols {
                group: Some(','),
                decimal: '.',
                zero: '0',
                error: "Error",
            },
            Self::DeDe => NumberSymbols {
                group: Some('.'),
                decimal: ',',
                zero: '0',
                error: "Fehler",
            },
            Self::ArEg => NumberSymbols {
                group: Some('\u{066C}'),
                decimal: '\u{066B}',
                zero: '\u{0660}',
                error: "خطأ",
            },
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Separators and digit glyphs of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Thousands separator, `None` disables grouping
    pub group: Option<char>,
    /// Decimal separator
    pub decimal: char,
    /// Glyph for zero; the other nine digits follow it contiguously
    pub zero: char,
    /// Text shown in place of the error marker
    pub error: &'static str,
}

impl NumberSymbols {
    fn digit(&self, d: char) -> char {
        d.to_digit(10)
            .and_then(|n| char::from_u32(self.zero as u32 + n))
            .unwrap_or(d)
    }
}

/// Formats engine display text for presentation
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter {
    locale: Locale,
}

impl DisplayFormatter {
    /// Creates a formatter for the locale
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Renders the display text
    #[must_use]
    pub fn format(&self, display: &str) -> String {
        if self.locale == Locale::Raw {
            return display.to_string();
        }
        let symbols = self.locale.symbols();
        if display == ERROR_MARKER {
            return symbols.error.to_string();
        }

        let (sign, unsigned) = match display.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", display),
        };
        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(at) => unsigned.split_at(at),
            None => (unsigned, ""),
        };
        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (mantissa, None),
        };

        let mut out = String::with_capacity(display.len() * 2);
        out.push_str(sign);
        out.push_str(&group_digits(int_part, &symbols));
        if let Some(frac) = frac_part {
            out.push(symbols.decimal);
            out.extend(frac.chars().map(|c| symbols.digit(c)));
        }
        out.extend(exponent.chars().map(|c| symbols.digit(c)));
        out
    }
}

fn group_digits(int_part: &str, symbols: &NumberSymbols) -> String {
    let len = int_part.chars().count();
    let mut out = String::with_capacity(len * 2);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            if let Some(group) = symbols.group {
                out.push(group);
            }
        }
        out.push(symbols.digit(c));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(display: &str) -> String {
        DisplayFormatter::new(Locale::EnUs).format(display)
    }

    #[test]
    fn test_default_locale_is_en_us() {
        assert_eq!(DisplayFormatter::default().locale(), Locale::EnUs);
    }

    #[test]
    fn test_raw_passthrough() {
        let f = DisplayFormatter::new(Locale::Raw);
        assert_eq!(f.format("1234567.5"), "1234567.5");
        assert_eq!(f.format(ERROR_MARKER), ERROR_MARKER);
    }

    #[test]
    fn test_en_grouping() {
        assert_eq!(en("0"), "0");
        assert_eq!(en("999"), "999");
        assert_eq!(en("1000"), "1,000");
        assert_eq!(en("1234567"), "1,234,567");
    }

    #[test]
    fn test_en_keeps_fraction_and_trailing_dot() {
        assert_eq!(en("1234.50"), "1,234.50");
        assert_eq!(en("1234."), "1,234.");
        assert_eq!(en("0."), "0.");
    }

    #[test]
    fn test_en_negative() {
        assert_eq!(en("-1234567.25"), "-1,234,567.25");
        assert_eq!(en("-0."), "-0.");
    }

    #[test]
    fn test_exponent_is_not_grouped() {
        assert_eq!(en("1e+21"), "1e+21");
        assert_eq!(en("-1.25e-7"), "-1.25e-7");
    }

    #[test]
    fn test_de_separators() {
        let f = DisplayFormatter::new(Locale::DeDe);
        assert_eq!(f.format("1234567.5"), "1.234.567,5");
        assert_eq!(f.format(ERROR_MARKER), "Fehler");
    }

    #[test]
    fn test_ar_eg_glyphs() {
        let f = DisplayFormatter::new(Locale::ArEg);
        assert_eq!(f.format("1234.5"), "١٬٢٣٤٫٥");
        assert_eq!(f.format("0"), "٠");
        assert_eq!(f.format("9876"), "٩٬٨٧٦");
        assert_eq!(f.format(ERROR_MARKER), "خطأ");
    }

    #[test]
    fn test_error_marker_localized() {
        assert_eq!(en(ERROR_MARKER), "Error");
    }

    #[test]
    fn test_locale_tags_and_display() {
        assert_eq!(Locale::ArEg.tag(), "ar-EG");
        assert_eq!(Locale::DeDe.to_string(), "de-DE");
    }

    #[test]
    fn test_locale_serde_kebab_case() {
        assert_eq!(serde_json::to_string(&Locale::ArEg).unwrap(), "\"ar-eg\"");
        let locale: Locale = serde_json::from_str("\"en-us\"").unwrap();
        assert_eq!(locale, Locale::EnUs);
    }

    #[test]
    fn test_formatting_leaves_digits_recoverable() {
        for locale in Locale::ALL {
            let formatted = DisplayFormatter::new(locale).format("-1234.5");
            let digits: String = formatted
                .chars()
                .filter_map(|c| c.to_digit(10).or_else(|| {
                    let zero = locale.symbols().zero as u32;
                    (c as u32).checked_sub(zero).filter(|n| *n < 10)
                }))
                .map(|n| char::from_digit(n, 10).unwrap())
                .collect();
            assert_eq!(digits, "12345", "{locale}");
        }
    }
}
