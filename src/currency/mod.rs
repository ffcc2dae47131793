// ============================================================================
// Currency Registry
// Read-only currency information with an explicit runtime write path
// ============================================================================
//
// The built-in tables in `data` are embedded at compile time and only ever
// read. Runtime additions and overrides live in a separate overlay guarded
// by a `parking_lot::RwLock`; every read accessor checks the overlay first
// so a replaced built-in entry masks the embedded one.

mod data;
mod registry;

pub use registry::{CurrencyInfo, RegisterError, SymbolEntry};

use crate::locale::Locale;
use registry::RUNTIME;

/// Check whether a currency code is valid.
///
/// An empty currency code is considered valid.
pub fn is_valid(currency_code: &str) -> bool {
    if currency_code.is_empty() {
        return true;
    }
    get_info(currency_code).is_some()
}

/// Look up the numeric code and fraction digits for a currency code.
///
/// Exact match only; codes are uppercase exactly as registered. Returns
/// `None` for the empty code and for unknown codes.
pub fn get_info(currency_code: &str) -> Option<CurrencyInfo> {
    if currency_code.is_empty() {
        return None;
    }
    if let Some(info) = RUNTIME.read().currencies.get(currency_code) {
        return Some(*info);
    }
    data::CURRENCIES
        .iter()
        .find(|c| c.code == currency_code)
        .map(|c| CurrencyInfo::new(c.numeric_code, c.digits))
}

/// Return the numeric code for a currency code, e.g. "840" for USD.
pub fn get_numeric_code(currency_code: &str) -> Option<String> {
    get_info(currency_code).map(|info| info.numeric_code().to_string())
}

/// Return the number of fraction digits for a currency code.
pub fn get_digits(currency_code: &str) -> Option<u8> {
    get_info(currency_code).map(|info| info.digits())
}

/// Return the display symbol for a currency code in the given locale.
///
/// Returns `None` for unknown codes. A known currency with no symbol data
/// uses its own code as the symbol. Otherwise the locale's own identifier
/// and then each parent identifier is checked against the currency's
/// symbol entries in registration order; "en", "en-US" and the empty
/// locale short-circuit to the default (first) symbol. If the whole chain
/// is exhausted without a match, the default symbol is returned.
pub fn get_symbol(currency_code: &str, locale: &Locale) -> Option<String> {
    if currency_code.is_empty() || !is_valid(currency_code) {
        return None;
    }
    if !has_symbols(currency_code) {
        return Some(currency_code.to_string());
    }
    let id = locale.to_string();
    if id.is_empty() || id == "en" || id == "en-US" {
        return first_symbol(currency_code);
    }

    let mut locale = locale.clone();
    loop {
        if let Some(symbol) = symbol_for_locale_id(currency_code, &locale.to_string()) {
            return Some(symbol);
        }
        locale = locale.parent();
        if locale.is_empty() {
            break;
        }
    }

    // The parent chain had no covering entry; fall back to the default.
    first_symbol(currency_code)
}

/// Return all known currency codes.
///
/// Built-in codes come first, in their fixed curated order, followed by
/// runtime-registered codes in registration order.
pub fn currency_codes() -> Vec<String> {
    let runtime = RUNTIME.read();
    let mut codes: Vec<String> = data::CURRENCIES
        .iter()
        .map(|c| c.code.to_string())
        .collect();
    codes.extend(runtime.codes.iter().cloned());

    codes
}

/// Return the currency code for an ISO 3166 country code.
pub fn for_country_code(country_code: &str) -> Option<&'static str> {
    data::COUNTRY_CURRENCIES
        .binary_search_by(|(country, _)| country.cmp(&country_code))
        .ok()
        .map(|i| data::COUNTRY_CURRENCIES[i].1)
}

/// Register a new currency.
///
/// Fails if the code is empty or already present, either as a built-in or
/// as a previous runtime registration. Use [`replace_currency`] to
/// customize an existing entry.
pub fn register_currency(
    currency_code: &str,
    info: CurrencyInfo,
    symbols: Vec<SymbolEntry>,
) -> Result<(), RegisterError> {
    if currency_code.is_empty() {
        return Err(RegisterError::EmptyCurrencyCode);
    }
    let mut runtime = RUNTIME.write();
    let builtin = data::CURRENCIES.iter().any(|c| c.code == currency_code);
    if builtin || runtime.currencies.contains_key(currency_code) {
        return Err(RegisterError::CurrencyAlreadyExists {
            code: currency_code.to_string(),
        });
    }
    runtime.currencies.insert(currency_code.to_string(), info);
    runtime.codes.push(currency_code.to_string());
    if !symbols.is_empty() {
        runtime.symbols.insert(currency_code.to_string(), symbols);
    }
    tracing::debug!(code = currency_code, "registered currency");

    Ok(())
}

/// Register or overwrite a currency wholesale.
///
/// Unlike [`register_currency`] this lower-level path replaces the info and
/// symbol list of an existing entry, masking a built-in one if present.
/// Intended as a one-time initialization step; concurrent use is serialized
/// by the registry lock.
pub fn replace_currency(
    currency_code: &str,
    info: CurrencyInfo,
    symbols: Vec<SymbolEntry>,
) -> Result<(), RegisterError> {
    if currency_code.is_empty() {
        return Err(RegisterError::EmptyCurrencyCode);
    }
    let mut runtime = RUNTIME.write();
    let known = data::CURRENCIES.iter().any(|c| c.code == currency_code)
        || runtime.currencies.contains_key(currency_code);
    runtime.currencies.insert(currency_code.to_string(), info);
    runtime.symbols.insert(currency_code.to_string(), symbols);
    if !known {
        runtime.codes.push(currency_code.to_string());
    }
    tracing::debug!(code = currency_code, "replaced currency");

    Ok(())
}

/// Whether any symbol entries exist for a currency code.
fn has_symbols(currency_code: &str) -> bool {
    if RUNTIME.read().symbols.contains_key(currency_code) {
        return true;
    }
    data::SYMBOLS.iter().any(|(code, _)| *code == currency_code)
}

/// The default ("en") symbol: the first registered entry.
fn first_symbol(currency_code: &str) -> Option<String> {
    if let Some(entries) = RUNTIME.read().symbols.get(currency_code) {
        return entries.first().map(|e| e.symbol.clone());
    }
    data::SYMBOLS
        .iter()
        .find(|(code, _)| *code == currency_code)
        .and_then(|(_, entries)| entries.first())
        .map(|e| e.symbol.to_string())
}

/// The first symbol entry whose locale set contains the given identifier.
fn symbol_for_locale_id(currency_code: &str, locale_id: &str) -> Option<String> {
    if let Some(entries) = RUNTIME.read().symbols.get(currency_code) {
        return entries
            .iter()
            .find(|e| e.locales.iter().any(|l| l == locale_id))
            .map(|e| e.symbol.clone());
    }
    data::SYMBOLS
        .iter()
        .find(|(code, _)| *code == currency_code)
        .and_then(|(_, entries)| {
            entries
                .iter()
                .find(|e| e.locales.contains(&locale_id))
                .map(|e| e.symbol.to_string())
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid(""));
        assert!(is_valid("USD"));
        assert!(is_valid("JPY"));
        assert!(!is_valid("usd"));
        assert!(!is_valid("XXX"));
        assert!(!is_valid("INVALID"));
    }

    #[test]
    fn test_get_numeric_code() {
        assert_eq!(get_numeric_code("USD").as_deref(), Some("840"));
        assert_eq!(get_numeric_code("ARS").as_deref(), Some("032"));
        assert_eq!(get_numeric_code(""), None);
        assert_eq!(get_numeric_code("XXX"), None);
    }

    #[test]
    fn test_get_digits() {
        assert_eq!(get_digits("USD"), Some(2));
        assert_eq!(get_digits("JPY"), Some(0));
        assert_eq!(get_digits("OMR"), Some(3));
        assert_eq!(get_digits("RSD"), Some(0));
        assert_eq!(get_digits(""), None);
        assert_eq!(get_digits("XXX"), None);
    }

    #[test]
    fn test_get_symbol() {
        // Default symbol for English locales and the empty locale.
        assert_eq!(
            get_symbol("USD", &Locale::new("en")).as_deref(),
            Some("$")
        );
        assert_eq!(
            get_symbol("USD", &Locale::new("en-US")).as_deref(),
            Some("$")
        );
        assert_eq!(get_symbol("USD", &Locale::default()).as_deref(), Some("$"));

        // Locale-scoped overrides.
        assert_eq!(
            get_symbol("USD", &Locale::new("es")).as_deref(),
            Some("US$")
        );
        assert_eq!(
            get_symbol("USD", &Locale::new("fr")).as_deref(),
            Some("$US")
        );
        // The parent chain is walked: es-CL -> es-419 -> es.
        assert_eq!(
            get_symbol("USD", &Locale::new("es-CL")).as_deref(),
            Some("US$")
        );
        // de has no override; the chain reaches "en" and its default.
        assert_eq!(
            get_symbol("USD", &Locale::new("de-CH")).as_deref(),
            Some("$")
        );

        // A known currency without symbol data uses its code.
        assert_eq!(
            get_symbol("CHF", &Locale::new("de-CH")).as_deref(),
            Some("CHF")
        );

        // Unknown codes have no symbol.
        assert_eq!(get_symbol("XXX", &Locale::new("en")), None);
        assert_eq!(get_symbol("", &Locale::new("en")), None);
    }

    #[test]
    fn test_currency_codes() {
        let codes = currency_codes();
        // Curated order: reserve currencies first.
        assert_eq!(&codes[..5], &["USD", "EUR", "JPY", "GBP", "CHF"]);
        assert!(codes.iter().any(|c| c == "ZAR"));
    }

    #[test]
    fn test_for_country_code() {
        assert_eq!(for_country_code("US"), Some("USD"));
        assert_eq!(for_country_code("AT"), Some("EUR"));
        assert_eq!(for_country_code("JP"), Some("JPY"));
        assert_eq!(for_country_code("RS"), Some("RSD"));
        assert_eq!(for_country_code("ZZ"), None);
        assert_eq!(for_country_code("us"), None);
    }

    #[test]
    fn test_register_currency() {
        let err = register_currency("", CurrencyInfo::new("999", 2), vec![]).unwrap_err();
        assert_eq!(err, RegisterError::EmptyCurrencyCode);

        let err = register_currency("USD", CurrencyInfo::new("840", 2), vec![]).unwrap_err();
        assert_eq!(
            err,
            RegisterError::CurrencyAlreadyExists {
                code: "USD".to_string()
            }
        );

        register_currency(
            "XBT",
            CurrencyInfo::new("999", 8),
            vec![
                SymbolEntry::new("₿", &["en"]),
                SymbolEntry::new("XBT", &["fr"]),
            ],
        )
        .unwrap();
        assert!(is_valid("XBT"));
        assert_eq!(get_digits("XBT"), Some(8));
        assert_eq!(get_numeric_code("XBT").as_deref(), Some("999"));
        assert_eq!(get_symbol("XBT", &Locale::new("en")).as_deref(), Some("₿"));
        assert_eq!(
            get_symbol("XBT", &Locale::new("fr")).as_deref(),
            Some("XBT")
        );
        assert!(currency_codes().iter().any(|c| c == "XBT"));

        // Double registration of the same runtime code fails.
        let err = register_currency("XBT", CurrencyInfo::new("999", 8), vec![]).unwrap_err();
        assert_eq!(
            err,
            RegisterError::CurrencyAlreadyExists {
                code: "XBT".to_string()
            }
        );
    }

    #[test]
    fn test_symbol_chain_exhaustion_falls_back_to_default() {
        // The only entry covers "pl" exclusively, so a "ja" lookup walks
        // ja -> en -> (empty) without a match and takes the default.
        register_currency(
            "XTS",
            CurrencyInfo::new("963", 2),
            vec![SymbolEntry::new("T$", &["pl"])],
        )
        .unwrap();
        assert_eq!(get_symbol("XTS", &Locale::new("ja")).as_deref(), Some("T$"));
        assert_eq!(get_symbol("XTS", &Locale::new("pl")).as_deref(), Some("T$"));
    }

    #[test]
    fn test_replace_currency() {
        let err = replace_currency("", CurrencyInfo::new("999", 2), vec![]).unwrap_err();
        assert_eq!(err, RegisterError::EmptyCurrencyCode);

        // A fresh code registers through the overwrite path too.
        replace_currency(
            "XAU",
            CurrencyInfo::new("959", 0),
            vec![SymbolEntry::new("XAU", &["en"])],
        )
        .unwrap();
        assert_eq!(get_digits("XAU"), Some(0));

        // Replacing it again swaps info and symbols wholesale.
        replace_currency(
            "XAU",
            CurrencyInfo::new("959", 3),
            vec![SymbolEntry::new("oz", &["en"])],
        )
        .unwrap();
        assert_eq!(get_digits("XAU"), Some(3));
        assert_eq!(get_symbol("XAU", &Locale::new("en")).as_deref(), Some("oz"));
        // Still enumerated once.
        let codes = currency_codes();
        assert_eq!(codes.iter().filter(|c| *c == "XAU").count(), 1);
    }
}
