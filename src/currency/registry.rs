// ============================================================================
// Runtime Registry Overlay
// Write path for registering or customizing currencies at runtime
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use arrayvec::ArrayString;
use parking_lot::RwLock;

/// Numeric code and fraction digits for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    numeric_code: ArrayString<3>,
    digits: u8,
}

impl CurrencyInfo {
    /// Create currency info from a 3-digit numeric code and a fraction
    /// digit count. Characters past the third are ignored.
    pub fn new(numeric_code: &str, digits: u8) -> Self {
        let mut code = ArrayString::new();
        for c in numeric_code.chars() {
            if code.try_push(c).is_err() {
                break;
            }
        }
        Self {
            numeric_code: code,
            digits,
        }
    }

    /// The 3-digit numeric code, e.g. "840" for USD.
    #[inline]
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// The number of minor-unit decimal places, e.g. 2 for USD, 0 for JPY.
    #[inline]
    pub const fn digits(&self) -> u8 {
        self.digits
    }
}

/// One display symbol and the locale identifiers it applies to.
///
/// The first entry registered for a currency is its "en"/"en-US" default;
/// later entries are locale-scoped overrides checked in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: String,
    pub locales: Vec<String>,
}

impl SymbolEntry {
    pub fn new(symbol: &str, locales: &[&str]) -> Self {
        Self {
            symbol: symbol.to_string(),
            locales: locales.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

/// Errors that can occur when registering a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The currency code was empty.
    EmptyCurrencyCode,
    /// The currency code is already present (built-in or previously registered).
    CurrencyAlreadyExists { code: String },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::EmptyCurrencyCode => write!(f, "empty currency code"),
            RegisterError::CurrencyAlreadyExists { code } => {
                write!(f, "currency code {code:?} is already registered")
            }
        }
    }
}

impl std::error::Error for RegisterError {}

/// Currencies added or replaced at runtime, layered over the built-in tables.
#[derive(Default)]
pub(crate) struct RuntimeRegistry {
    pub currencies: HashMap<String, CurrencyInfo>,
    pub symbols: HashMap<String, Vec<SymbolEntry>>,
    /// Registration order, appended to the built-in enumeration order.
    pub codes: Vec<String>,
}

pub(crate) static RUNTIME: LazyLock<RwLock<RuntimeRegistry>> =
    LazyLock::new(|| RwLock::new(RuntimeRegistry::default()));
