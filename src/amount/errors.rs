// ============================================================================
// Amount Errors
// Error types for currency amount construction and arithmetic
// ============================================================================

use std::fmt;

use super::Amount;

/// Errors that can occur when constructing or operating on amounts.
///
/// All variants are local, recoverable conditions; the offending input is
/// carried so callers can build diagnostics without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// A numeric string failed decimal parsing, or a divisor was zero.
    InvalidNumber { number: String },
    /// A currency code is non-empty and absent from the registry.
    InvalidCurrencyCode { code: String },
    /// Two amounts with different non-empty currency codes were combined.
    CurrencyMismatch { a: Amount, b: Amount },
    /// The result exceeded the supported decimal precision.
    Overflow,
}

impl AmountError {
    pub(crate) fn invalid_number(number: &str) -> Self {
        AmountError::InvalidNumber {
            number: number.to_string(),
        }
    }

    pub(crate) fn invalid_currency_code(code: &str) -> Self {
        AmountError::InvalidCurrencyCode {
            code: code.to_string(),
        }
    }
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidNumber { number } => {
                write!(f, "invalid number {number:?}")
            }
            AmountError::InvalidCurrencyCode { code } => {
                write!(f, "invalid currency code {code:?}")
            }
            AmountError::CurrencyMismatch { a, b } => {
                write!(
                    f,
                    "amounts \"{a}\" and \"{b}\" have mismatched currency codes"
                )
            }
            AmountError::Overflow => {
                write!(f, "arithmetic overflow: result exceeds the supported precision")
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Result type alias for amount operations.
pub type AmountResult<T> = Result<T, AmountError>;
