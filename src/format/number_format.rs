// ============================================================================
// Locale number formats
// CLDR currency pattern data and per-locale lookup
// ============================================================================

use crate::locale::Locale;

use super::digits::NumberingSystem;

/// The CLDR currency formatting data for one locale.
///
/// Patterns use "0.00" as the numeral placeholder and '¤' as the currency
/// placeholder. A pattern may carry an explicit negative variant after a
/// ';'; locales without one derive it by prefixing the minus sign.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    pub standard_pattern: &'static str,
    /// Empty when the locale has no distinct accounting pattern.
    pub accounting_pattern: &'static str,
    pub decimal_separator: &'static str,
    pub grouping_separator: &'static str,
    pub plus_sign: &'static str,
    pub minus_sign: &'static str,
    /// Size of the rightmost integer digit group. 0 disables grouping.
    pub primary_grouping_size: u8,
    /// Size of the remaining groups; falls back to primary when 0.
    pub secondary_grouping_size: u8,
    /// Minimum integer digits before the first separator appears.
    pub min_grouping_digits: u8,
    pub numbering_system: NumberingSystem,
}

const DEFAULT_FORMAT: NumberFormat = NumberFormat {
    standard_pattern: "¤0.00",
    accounting_pattern: "¤0.00;(¤0.00)",
    decimal_separator: ".",
    grouping_separator: ",",
    plus_sign: "+",
    minus_sign: "-",
    primary_grouping_size: 3,
    secondary_grouping_size: 3,
    min_grouping_digits: 1,
    numbering_system: NumberingSystem::Latn,
};

/// Locale formats, sorted by locale identifier.
static FORMATS: &[(&str, NumberFormat)] = &[
    (
        "ar",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: "\u{66b}",
            grouping_separator: "\u{66c}",
            plus_sign: "\u{61c}+",
            minus_sign: "\u{61c}-",
            numbering_system: NumberingSystem::Arab,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "bg",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: "\u{a0}",
            primary_grouping_size: 0,
            secondary_grouping_size: 0,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "bn",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ".",
            grouping_separator: ",",
            primary_grouping_size: 3,
            secondary_grouping_size: 2,
            numbering_system: NumberingSystem::Beng,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "de",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: ".",
            ..DEFAULT_FORMAT
        },
    ),
    (
        "de-AT",
        NumberFormat {
            standard_pattern: "¤\u{a0}0.00",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: ".",
            ..DEFAULT_FORMAT
        },
    ),
    (
        "de-CH",
        NumberFormat {
            standard_pattern: "¤\u{a0}0.00;¤-0.00",
            accounting_pattern: "",
            decimal_separator: ".",
            grouping_separator: "’",
            ..DEFAULT_FORMAT
        },
    ),
    ("en", DEFAULT_FORMAT),
    (
        "es",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: ".",
            min_grouping_digits: 2,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "fa",
        NumberFormat {
            standard_pattern: "\u{200e}¤0.00",
            accounting_pattern: "",
            decimal_separator: "\u{66b}",
            grouping_separator: "\u{66c}",
            plus_sign: "\u{200e}+",
            minus_sign: "\u{200e}-",
            numbering_system: NumberingSystem::ArabExt,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "fr",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: "\u{a0}",
            ..DEFAULT_FORMAT
        },
    ),
    (
        "hi",
        NumberFormat {
            standard_pattern: "¤0.00",
            accounting_pattern: "",
            decimal_separator: ".",
            grouping_separator: ",",
            primary_grouping_size: 3,
            secondary_grouping_size: 2,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "ja",
        NumberFormat {
            standard_pattern: "¤0.00",
            accounting_pattern: "",
            ..DEFAULT_FORMAT
        },
    ),
    (
        "my",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            numbering_system: NumberingSystem::Mymr,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "ne",
        NumberFormat {
            standard_pattern: "¤\u{a0}0.00",
            accounting_pattern: "",
            primary_grouping_size: 3,
            secondary_grouping_size: 2,
            numbering_system: NumberingSystem::Deva,
            ..DEFAULT_FORMAT
        },
    ),
    (
        "sr",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: ".",
            ..DEFAULT_FORMAT
        },
    ),
    (
        "sr-Latn",
        NumberFormat {
            standard_pattern: "0.00\u{a0}¤",
            accounting_pattern: "",
            decimal_separator: ",",
            grouping_separator: ".",
            ..DEFAULT_FORMAT
        },
    ),
];

/// Resolve the number format for a locale, walking the parent chain and
/// falling back to the "en" defaults. "en-US" and the empty locale take
/// the common-case shortcut straight to "en".
pub(crate) fn for_locale(locale: &Locale) -> NumberFormat {
    let id = locale.to_string();
    if id.is_empty() || id == "en" || id == "en-US" {
        return DEFAULT_FORMAT;
    }
    let mut current = locale.clone();
    while !current.is_empty() {
        let id = current.to_string();
        if let Ok(i) = FORMATS.binary_search_by(|(candidate, _)| candidate.cmp(&id.as_str())) {
            return FORMATS[i].1;
        }
        current = current.parent();
    }

    DEFAULT_FORMAT
}
