// ============================================================================
// Formatter
// Locale-sensitive currency formatting and parsing
// ============================================================================

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::amount::{Amount, AmountResult, RoundingMode};
use crate::currency;
use crate::locale::Locale;

use super::number_format::{self, NumberFormat};

/// How the currency is rendered in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    /// The locale-specific symbol, e.g. "$". Falls back to the code when
    /// no symbol is known.
    #[default]
    Symbol,
    /// The ISO code, e.g. "USD".
    Code,
    /// No currency indicator at all.
    None,
}

/// Formats and parses amounts according to one locale's CLDR rules.
///
/// A formatter is configured once and then shared freely: `format` and
/// `parse` take `&self` and never mutate, so a single instance can serve
/// any number of threads.
///
/// # Example
/// ```
/// use decimal_currency::amount::Amount;
/// use decimal_currency::format::Formatter;
/// use decimal_currency::locale::Locale;
///
/// let formatter = Formatter::new(Locale::new("en"));
/// let amount = Amount::new("1234.59", "USD")?;
/// assert_eq!(formatter.format(amount), "$1,234.59");
/// # Ok::<(), decimal_currency::amount::AmountError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: Locale,
    format: NumberFormat,
    /// Use the locale's accounting pattern (negative amounts in
    /// parentheses) when it has one.
    pub accounting_style: bool,
    /// Render an explicit plus sign on positive amounts.
    pub add_plus_sign: bool,
    /// Suppress digit grouping entirely.
    pub no_grouping: bool,
    /// Minimum fraction digits. Defaults to the currency's digit count.
    pub min_digits: Option<u8>,
    /// Maximum fraction digits. Defaults to the currency's digit count.
    pub max_digits: Option<u8>,
    /// Rounding applied when the amount exceeds the maximum digits.
    pub rounding_mode: RoundingMode,
    pub currency_display: CurrencyDisplay,
    /// Per-code symbol overrides consulted before the symbol registry.
    pub symbol_map: HashMap<String, String>,
}

impl Formatter {
    /// Create a formatter for the given locale. Locale data resolves
    /// through the parent chain, falling back to "en" defaults.
    pub fn new(locale: Locale) -> Formatter {
        let format = number_format::for_locale(&locale);
        Formatter {
            locale,
            format,
            accounting_style: false,
            add_plus_sign: false,
            no_grouping: false,
            min_digits: None,
            max_digits: None,
            rounding_mode: RoundingMode::default(),
            currency_display: CurrencyDisplay::default(),
            symbol_map: HashMap::new(),
        }
    }

    /// The locale the formatter was created for.
    #[inline]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render the amount per the locale's currency pattern.
    pub fn format(&self, amount: Amount) -> String {
        let mut pattern = self.pattern_for(amount);
        // The sign comes from the pattern, so render the magnitude only.
        let working = if amount.is_negative() { -amount } else { amount };
        let number = self.formatted_number(working);
        let currency = self.rendered_currency(amount.currency_code());

        // A letter-adjacent currency gets a non-breaking space, per CLDR.
        if !currency.is_empty() {
            if pattern.contains("0¤")
                && currency.chars().next().is_some_and(char::is_alphabetic)
            {
                pattern = pattern.replace("0¤", "0\u{a0}¤");
            }
            if pattern.contains("¤0")
                && currency.chars().last().is_some_and(char::is_alphabetic)
            {
                pattern = pattern.replace("¤0", "¤\u{a0}0");
            }
        }

        let mut out = pattern.replace("0.00", &number);
        out = out.replace('+', self.format.plus_sign);
        out = out.replace('-', self.format.minus_sign);
        if currency.is_empty() {
            out = out.replace("\u{a0}¤", "");
            out = out.replace("¤\u{a0}", "");
            out = out.replace('¤', "");
        } else {
            out = out.replace('¤', &currency);
        }

        out
    }

    /// Parse localized input back into an amount.
    ///
    /// Accepts output of [`Formatter::format`] in any of the display
    /// modes, as well as unlocalized input such as "1234.59".
    ///
    /// # Errors
    /// `InvalidNumber` if nothing numeric remains after delocalization,
    /// `InvalidCurrencyCode` if the code is non-empty and unknown.
    pub fn parse(&self, s: &str, currency_code: &str) -> AmountResult<Amount> {
        let mut n = s.replace(self.format.grouping_separator, "");
        n = n.replace(self.format.decimal_separator, ".");
        n = n.replace(self.format.plus_sign, "+");
        n = n.replace(self.format.minus_sign, "-");
        if !currency_code.is_empty() {
            if let Some(symbol) = currency::get_symbol(currency_code, &self.locale) {
                if !symbol.is_empty() {
                    n = n.replace(&symbol, "");
                }
            }
            n = n.replace(currency_code, "");
        }
        for noise in ["\u{200e}", "\u{200f}", "\u{a0}", " "] {
            n = n.replace(noise, "");
        }
        n = self.format.numbering_system.delocalize(&n);
        if self.accounting_style {
            n = n.replace('(', "-").replace(')', "");
        }

        Amount::new(&n, currency_code)
    }

    /// Select the sub-pattern for the amount's sign and the formatter's
    /// style, synthesizing variants the locale data does not spell out.
    fn pattern_for(&self, amount: Amount) -> String {
        let base = if self.accounting_style && !self.format.accounting_pattern.is_empty() {
            self.format.accounting_pattern
        } else {
            self.format.standard_pattern
        };
        let (positive, negative) = match base.split_once(';') {
            Some((p, n)) => (p.to_string(), n.to_string()),
            None => (base.to_string(), format!("-{base}")),
        };
        if amount.is_negative() {
            negative
        } else if self.add_plus_sign {
            if negative.contains('-') {
                negative.replace('-', "+")
            } else {
                format!("+{positive}")
            }
        } else {
            positive
        }
    }

    /// Round, trim, group, and localize the numeral. The amount must be
    /// non-negative.
    fn formatted_number(&self, amount: Amount) -> String {
        let currency_digits = currency::get_digits(amount.currency_code()).unwrap_or(0);
        let min = self.min_digits.unwrap_or(currency_digits);
        let max = self.max_digits.unwrap_or(currency_digits).max(min);

        let rendered = amount.round_to(max, self.rounding_mode).number();
        let (major, minor) = match rendered.split_once('.') {
            Some((major, minor)) => (major, minor.trim_end_matches('0')),
            None => (rendered.as_str(), ""),
        };
        let mut minor = minor.to_string();
        while minor.len() < usize::from(min) {
            minor.push('0');
        }

        let mut out = self.group_major_digits(major);
        if !minor.is_empty() {
            out.push_str(self.format.decimal_separator);
            out.push_str(&minor);
        }

        self.format.numbering_system.localize(&out)
    }

    /// Insert grouping separators into an unsigned run of ASCII digits.
    fn group_major_digits(&self, digits: &str) -> String {
        let primary = usize::from(self.format.primary_grouping_size);
        if self.no_grouping || primary == 0 {
            return digits.to_string();
        }
        if digits.len() < primary + usize::from(self.format.min_grouping_digits) {
            return digits.to_string();
        }
        let mut secondary = usize::from(self.format.secondary_grouping_size);
        if secondary == 0 {
            secondary = primary;
        }

        let mut groups: SmallVec<[&str; 8]> = SmallVec::new();
        let mut end = digits.len();
        let mut size = primary;
        while end > size {
            groups.push(&digits[end - size..end]);
            end -= size;
            size = secondary;
        }
        groups.push(&digits[..end]);
        groups.reverse();

        groups.join(self.format.grouping_separator)
    }

    /// The currency indicator for the configured display mode.
    fn rendered_currency(&self, code: &str) -> String {
        if code.is_empty() {
            return String::new();
        }
        match self.currency_display {
            CurrencyDisplay::None => String::new(),
            CurrencyDisplay::Code => code.to_string(),
            CurrencyDisplay::Symbol => {
                if let Some(symbol) = self.symbol_map.get(code) {
                    return symbol.clone();
                }
                currency::get_symbol(code, &self.locale).unwrap_or_else(|| code.to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(number: &str, code: &str) -> Amount {
        Amount::new(number, code).unwrap()
    }

    #[test]
    fn test_format_basic() {
        let tests = [
            ("en", "1234.59", "USD", "$1,234.59"),
            ("en", "-1234.59", "USD", "-$1,234.59"),
            ("en", "1234.59", "EUR", "€1,234.59"),
            // No known symbol: code with a separating non-breaking space.
            ("en", "1234.59", "CHF", "CHF\u{a0}1,234.59"),
            ("de", "1234.59", "EUR", "1.234,59\u{a0}€"),
            ("de-AT", "1234.59", "USD", "$\u{a0}1.234,59"),
            ("de-CH", "1234.59", "USD", "$\u{a0}1’234.59"),
            ("de-CH", "-1234.59", "USD", "$-1’234.59"),
            ("fr", "1234.59", "USD", "1\u{a0}234,59\u{a0}$US"),
            ("ja", "1234.59", "JPY", "¥1,235"),
        ];
        for (locale, number, code, want) in tests {
            let formatter = Formatter::new(Locale::new(locale));
            assert_eq!(formatter.format(amount(number, code)), want, "{locale} {code}");
        }
    }

    #[test]
    fn test_format_numbering_systems() {
        let tests = [
            ("ar", "1234.59", "USD", "١٬٢٣٤٫٥٩\u{a0}US$"),
            ("fa", "1234.59", "USD", "\u{200e}US$۱٬۲۳۴٫۵۹"),
            ("bn", "1234.59", "USD", "১,২৩৪.৫৯\u{a0}US$"),
            ("ne", "1234.59", "USD", "US$\u{a0}१,२३४.५९"),
            ("my", "1234.59", "USD", "၁,၂၃၄.၅၉\u{a0}US$"),
        ];
        for (locale, number, code, want) in tests {
            let formatter = Formatter::new(Locale::new(locale));
            assert_eq!(formatter.format(amount(number, code)), want, "{locale}");
        }
    }

    #[test]
    fn test_format_grouping() {
        let tests = [
            ("en", "123.99", "123.99"),
            ("en", "1234.99", "1,234.99"),
            ("en", "1234567.99", "1,234,567.99"),
            // Spanish groups only from five integer digits.
            ("es", "1234.99", "1234,99"),
            ("es", "12345.99", "12.345,99"),
            // Hindi uses 3;2 grouping.
            ("hi", "1234567.99", "12,34,567.99"),
            // Bulgarian does not group at all.
            ("bg", "1234567.99", "1234567,99"),
        ];
        for (locale, number, want) in tests {
            let mut formatter = Formatter::new(Locale::new(locale));
            formatter.currency_display = CurrencyDisplay::None;
            assert_eq!(formatter.format(amount(number, "USD")), want, "{locale}");
        }

        let mut formatter = Formatter::new(Locale::new("en"));
        formatter.currency_display = CurrencyDisplay::None;
        formatter.no_grouping = true;
        assert_eq!(formatter.format(amount("1234567.99", "USD")), "1234567.99");
    }

    #[test]
    fn test_format_digits() {
        // (min, max, number, want)
        let tests = [
            (None, None, "12.3564", "12.36"),
            (None, Some(6), "12.3564", "12.3564"),
            (None, Some(6), "12.30", "12.30"),
            (Some(3), None, "12.3", "12.300"),
            (Some(0), Some(6), "12.00", "12"),
            (Some(0), Some(6), "12.50", "12.5"),
        ];
        for (min, max, number, want) in tests {
            let mut formatter = Formatter::new(Locale::new("en"));
            formatter.currency_display = CurrencyDisplay::None;
            formatter.min_digits = min;
            formatter.max_digits = max;
            assert_eq!(
                formatter.format(amount(number, "USD")),
                want,
                "min {min:?} max {max:?} {number}"
            );
        }
    }

    #[test]
    fn test_format_rounding_mode() {
        let mut formatter = Formatter::new(Locale::new("en"));
        formatter.currency_display = CurrencyDisplay::None;
        formatter.rounding_mode = RoundingMode::Down;
        assert_eq!(formatter.format(amount("12.999", "USD")), "12.99");
        formatter.rounding_mode = RoundingMode::HalfEven;
        assert_eq!(formatter.format(amount("12.345", "USD")), "12.34");
    }

    #[test]
    fn test_format_currency_display() {
        let tests = [
            (CurrencyDisplay::Symbol, "en", "$1,234.59"),
            (CurrencyDisplay::Code, "en", "USD\u{a0}1,234.59"),
            (CurrencyDisplay::None, "en", "1,234.59"),
            (CurrencyDisplay::Symbol, "de-AT", "$\u{a0}1.234,59"),
            (CurrencyDisplay::Code, "de-AT", "USD\u{a0}1.234,59"),
            (CurrencyDisplay::None, "de-AT", "1.234,59"),
            (CurrencyDisplay::Symbol, "sr-Latn", "1.234,59\u{a0}US$"),
            (CurrencyDisplay::Code, "sr-Latn", "1.234,59\u{a0}USD"),
            (CurrencyDisplay::None, "sr-Latn", "1.234,59"),
        ];
        for (display, locale, want) in tests {
            let mut formatter = Formatter::new(Locale::new(locale));
            formatter.currency_display = display;
            assert_eq!(
                formatter.format(amount("1234.59", "USD")),
                want,
                "{display:?} {locale}"
            );
        }
    }

    #[test]
    fn test_format_symbol_map() {
        let mut formatter = Formatter::new(Locale::new("en"));
        formatter
            .symbol_map
            .insert("USD".to_string(), "US$".to_string());
        assert_eq!(formatter.format(amount("1234.59", "USD")), "US$1,234.59");
        // Other codes still use the registry.
        assert_eq!(formatter.format(amount("1234.59", "EUR")), "€1,234.59");
    }

    #[test]
    fn test_format_accounting_style() {
        let mut formatter = Formatter::new(Locale::new("en"));
        formatter.accounting_style = true;
        assert_eq!(formatter.format(amount("-3.00", "USD")), "($3.00)");
        assert_eq!(formatter.format(amount("3.00", "USD")), "$3.00");

        // Locales without an accounting pattern use the standard one.
        let mut formatter = Formatter::new(Locale::new("de"));
        formatter.accounting_style = true;
        assert_eq!(formatter.format(amount("-3.00", "EUR")), "-3,00\u{a0}€");
    }

    #[test]
    fn test_format_plus_sign() {
        let mut formatter = Formatter::new(Locale::new("en"));
        formatter.add_plus_sign = true;
        assert_eq!(formatter.format(amount("1234.59", "USD")), "+$1,234.59");
        assert_eq!(formatter.format(amount("-1234.59", "USD")), "-$1,234.59");

        let mut formatter = Formatter::new(Locale::new("de-CH"));
        formatter.add_plus_sign = true;
        assert_eq!(formatter.format(amount("1234.59", "USD")), "$+1’234.59");
    }

    #[test]
    fn test_format_empty_currency() {
        let formatter = Formatter::new(Locale::new("en"));
        assert_eq!(formatter.format(amount("1234.59", "")), "1,234.59");

        let formatter = Formatter::new(Locale::new("de"));
        assert_eq!(formatter.format(amount("1234.59", "")), "1.234,59");
    }

    #[test]
    fn test_parse() {
        let tests = [
            ("en", "$1,234.59", "USD", "1234.59"),
            ("en", "-$1,234.59", "USD", "-1234.59"),
            ("en", "USD 1,234.59", "USD", "1234.59"),
            ("en", "1234.59", "USD", "1234.59"),
            ("de-AT", "€\u{a0}1.234,00", "EUR", "1234.00"),
            ("de-AT", "€1.234,00", "EUR", "1234.00"),
            ("de-CH", "$\u{a0}1’234.59", "USD", "1234.59"),
            ("ar", "١٬٢٣٤٫٥٩\u{a0}US$", "USD", "1234.59"),
            ("ar", "\u{61c}-١٢٣٤", "USD", "-1234"),
            ("fa", "\u{200e}US$۱٬۲۳۴٫۵۹", "USD", "1234.59"),
        ];
        for (locale, input, code, want) in tests {
            let formatter = Formatter::new(Locale::new(locale));
            let parsed = formatter.parse(input, code).unwrap();
            assert_eq!(parsed.number(), want, "{locale} {input:?}");
            assert_eq!(parsed.currency_code(), code);
        }
    }

    #[test]
    fn test_parse_accounting() {
        let mut formatter = Formatter::new(Locale::new("en"));
        formatter.accounting_style = true;
        let parsed = formatter.parse("($3.00)", "USD").unwrap();
        assert_eq!(parsed.number(), "-3.00");

        // Parentheses are not stripped outside accounting mode.
        let formatter = Formatter::new(Locale::new("en"));
        assert!(formatter.parse("($3.00)", "USD").is_err());
    }

    #[test]
    fn test_parse_errors() {
        let formatter = Formatter::new(Locale::new("en"));
        assert!(formatter.parse("INVALID", "USD").is_err());
        assert!(formatter.parse("1234.59", "usd").is_err());
    }

    #[test]
    fn test_format_parse_round_trip() {
        for locale in ["en", "de", "de-CH", "fr", "ar", "hi"] {
            let formatter = Formatter::new(Locale::new(locale));
            let original = amount("1234.59", "USD");
            let rendered = formatter.format(original);
            let parsed = formatter.parse(&rendered, "USD").unwrap();
            assert_eq!(parsed, original, "{locale}: {rendered:?}");
        }
    }
}
