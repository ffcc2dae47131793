// ============================================================================
// Decimal Currency Library
// Currency-aware decimal arithmetic with CLDR locale formatting
// ============================================================================

//! # Decimal Currency
//!
//! Currency-aware monetary arithmetic and locale-sensitive formatting.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** on a 96-bit fixed-point representation,
//!   with input scale preserved ("50.00" stays "50.00")
//! - **ISO 4217 currency registry** with numeric codes, fraction digits,
//!   locale-specific symbols, and runtime registration of custom currencies
//! - **CLDR formatting** covering digit grouping, native numbering systems,
//!   accounting style, and per-locale currency placement
//! - **Locale-aware parsing** that reverses formatted output back into
//!   amounts
//! - **Immutable value types**, freely shareable across threads
//!
//! ## Example
//!
//! ```rust
//! use decimal_currency::prelude::*;
//!
//! let price = Amount::new("275.98", "EUR")?;
//! let total = price.mul("4")?;
//! assert_eq!(total.number(), "1103.92");
//!
//! let formatter = Formatter::new(Locale::new("de-AT"));
//! assert_eq!(formatter.format(total), "€\u{a0}1.103,92");
//! # Ok::<(), decimal_currency::amount::AmountError>(())
//! ```

pub mod amount;
pub mod currency;
pub mod format;
pub mod locale;

// Re-exports for convenience
pub mod prelude {
    pub use crate::amount::{Amount, AmountError, AmountResult, MinorAmount, RoundingMode};
    pub use crate::currency::{CurrencyInfo, RegisterError, SymbolEntry};
    pub use crate::format::{CurrencyDisplay, Formatter};
    pub use crate::locale::Locale;
}
