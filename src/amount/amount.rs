// ============================================================================
// Amount
// A decimal number bound to a currency code
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use arrayvec::ArrayString;
use rust_decimal::Decimal;

use super::errors::{AmountError, AmountResult};
use super::rounding::RoundingMode;
use crate::currency;

/// A decimal monetary amount with its currency code.
///
/// Amounts are immutable values: every operation returns a new `Amount`
/// and never mutates its operands, so concurrent reads of a shared amount
/// are always safe. The all-default value (zero number, empty currency
/// code) is a valid "untyped zero" usable as the identity for addition
/// and subtraction regardless of the other operand's currency.
///
/// Arithmetic runs in `rust_decimal`'s fixed 96-bit context
/// (28-29 significant digits); results that cannot be represented are
/// reported as [`AmountError::Overflow`].
///
/// # Example
/// ```
/// use decimal_currency::amount::Amount;
///
/// let a = Amount::new("20.99", "USD")?;
/// let b = Amount::new("3.50", "USD")?;
/// assert_eq!(a.add(b)?.to_string(), "24.49 USD");
/// # Ok::<(), decimal_currency::amount::AmountError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amount {
    number: Decimal,
    currency_code: ArrayString<3>,
}

impl Amount {
    /// Create an amount from a numeric string and a currency code.
    ///
    /// The numeric string must be a plain decimal: optional sign, digits,
    /// optional single decimal point, digits. The input scale is kept
    /// exactly ("50.00" stores two fraction digits). An empty currency
    /// code is accepted and produces a currency-less amount; a non-empty
    /// code must be present in the registry.
    ///
    /// # Errors
    /// `InvalidNumber` if the string is not a well-formed decimal,
    /// `InvalidCurrencyCode` if the code is non-empty and unknown.
    pub fn new(number: &str, currency_code: &str) -> AmountResult<Amount> {
        let number =
            Decimal::from_str(number).map_err(|_| AmountError::invalid_number(number))?;
        let currency_code = parse_code(currency_code)?;

        Ok(Amount {
            number,
            currency_code,
        })
    }

    /// Create an amount from an integer count of minor units.
    ///
    /// `from_minor_units(2099, "USD")` is 20.99 USD; `from_minor_units(50,
    /// "JPY")` is 50 JPY.
    ///
    /// # Errors
    /// `InvalidCurrencyCode` if the code is empty or unknown (the
    /// currency's fraction digit count is required).
    pub fn from_minor_units(n: i64, currency_code: &str) -> AmountResult<Amount> {
        let digits = currency::get_digits(currency_code)
            .ok_or_else(|| AmountError::invalid_currency_code(currency_code))?;
        let currency_code = parse_code(currency_code)?;

        Ok(Amount {
            number: Decimal::new(n, u32::from(digits)),
            currency_code,
        })
    }

    /// The number as a numeric string, e.g. "20.99".
    pub fn number(&self) -> String {
        self.number.to_string()
    }

    /// The currency code, e.g. "USD". Empty for the zero value.
    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// The amount in minor units, rounded to the currency's fraction
    /// digits first: 20.99 USD is 2099, 12.3564 USD is 1236.
    pub fn minor_units(&self) -> i128 {
        self.round().number.mantissa()
    }

    /// Convert the amount to a different currency at the given rate.
    ///
    /// The result keeps the full precision of the multiplication; rounding
    /// to the target currency's digits is a separate, explicit step.
    ///
    /// # Errors
    /// `InvalidCurrencyCode` if the target code is empty or unknown,
    /// `InvalidNumber` if the rate does not parse.
    pub fn convert(&self, currency_code: &str, rate: &str) -> AmountResult<Amount> {
        if currency_code.is_empty() || !currency::is_valid(currency_code) {
            return Err(AmountError::invalid_currency_code(currency_code));
        }
        let rate = Decimal::from_str(rate).map_err(|_| AmountError::invalid_number(rate))?;
        let number = self
            .number
            .checked_mul(rate)
            .ok_or(AmountError::Overflow)?;

        Ok(Amount {
            number,
            currency_code: parse_code(currency_code)?,
        })
    }

    /// Add two amounts.
    ///
    /// # Errors
    /// `CurrencyMismatch` if both operands carry distinct non-empty
    /// currency codes. An operand with an empty code (the untyped zero)
    /// is the arithmetic identity and adopts the other operand's code.
    pub fn add(&self, other: Amount) -> AmountResult<Amount> {
        let currency_code = self.combined_code(other)?;
        let number = self
            .number
            .checked_add(other.number)
            .ok_or(AmountError::Overflow)?;

        Ok(Amount {
            number,
            currency_code,
        })
    }

    /// Subtract `other` from the amount.
    ///
    /// # Errors
    /// Same mismatch rule as [`Amount::add`]; subtracting from the
    /// untyped zero negates the other operand and keeps its currency.
    pub fn sub(&self, other: Amount) -> AmountResult<Amount> {
        let currency_code = self.combined_code(other)?;
        let number = self
            .number
            .checked_sub(other.number)
            .ok_or(AmountError::Overflow)?;

        Ok(Amount {
            number,
            currency_code,
        })
    }

    /// Multiply the amount by a numeric string.
    ///
    /// The result keeps the combined scale rather than rounding to the
    /// currency's digits: 20.99 * 0.20 is 4.1980.
    pub fn mul(&self, n: &str) -> AmountResult<Amount> {
        let multiplier = Decimal::from_str(n).map_err(|_| AmountError::invalid_number(n))?;
        let number = self
            .number
            .checked_mul(multiplier)
            .ok_or(AmountError::Overflow)?;

        Ok(Amount {
            number,
            currency_code: self.currency_code,
        })
    }

    /// Divide the amount by a numeric string.
    ///
    /// # Errors
    /// `InvalidNumber` if the divisor does not parse or is exactly zero.
    pub fn div(&self, n: &str) -> AmountResult<Amount> {
        let divisor = Decimal::from_str(n).map_err(|_| AmountError::invalid_number(n))?;
        if divisor.is_zero() {
            return Err(AmountError::invalid_number(n));
        }
        let number = self
            .number
            .checked_div(divisor)
            .ok_or(AmountError::Overflow)?;

        Ok(Amount {
            number,
            currency_code: self.currency_code,
        })
    }

    /// Round to the currency's registered fraction digits with
    /// [`RoundingMode::HalfUp`]. A currency-less amount rounds to zero
    /// fraction digits.
    pub fn round(&self) -> Amount {
        let digits = currency::get_digits(self.currency_code()).unwrap_or(0);
        self.round_to(digits, RoundingMode::HalfUp)
    }

    /// Quantize to exactly `digits` fraction digits.
    ///
    /// Trailing zeros are added when the amount has fewer digits than
    /// requested; extra digits are rounded per `mode`. Applying the same
    /// call twice is a fixed point.
    pub fn round_to(&self, digits: u8, mode: RoundingMode) -> Amount {
        let digits = u32::from(digits);
        let mut number = self.number.round_dp_with_strategy(digits, mode.strategy());
        if number.scale() < digits {
            number.rescale(digits);
        }

        Amount {
            number,
            currency_code: self.currency_code,
        }
    }

    /// Compare two amounts numerically.
    ///
    /// # Errors
    /// `CurrencyMismatch` whenever the codes differ. Unlike `add`/`sub`,
    /// comparison does not exempt the untyped zero.
    pub fn cmp(&self, other: Amount) -> AmountResult<Ordering> {
        if self.currency_code != other.currency_code {
            return Err(AmountError::CurrencyMismatch {
                a: *self,
                b: other,
            });
        }
        Ok(self.number.cmp(&other.number))
    }

    /// Whether the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.number > Decimal::ZERO
    }

    /// Whether the amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.number < Decimal::ZERO
    }

    /// Whether the amount is numerically zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Compact binary encoding: a fixed 3-byte currency code prefix
    /// immediately followed by the numeral string.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = String::with_capacity(3 + 24);
        buf.push_str(self.currency_code());
        buf.push_str(&self.number());

        buf.into_bytes()
    }

    /// Decode the compact binary encoding produced by [`Amount::to_bytes`].
    ///
    /// # Errors
    /// `InvalidCurrencyCode` if fewer than 3 bytes are supplied or the
    /// prefix is not a registered code; `InvalidNumber` if the remainder
    /// is not a well-formed decimal.
    pub fn from_bytes(data: &[u8]) -> AmountResult<Amount> {
        if data.len() < 3 {
            return Err(AmountError::invalid_currency_code(&String::from_utf8_lossy(
                data,
            )));
        }
        let text = std::str::from_utf8(data)
            .map_err(|_| AmountError::invalid_number(&String::from_utf8_lossy(data)))?;
        let code = text
            .get(..3)
            .ok_or_else(|| AmountError::invalid_currency_code(text))?;
        let number = text.get(3..).unwrap_or("");

        Amount::new(number, code)
    }

    /// Relational composite-type encoding: "(number,currencyCode)",
    /// matching a two-column composite database type.
    pub fn to_composite(&self) -> String {
        format!("({},{})", self.number, self.currency_code)
    }

    /// Decode the composite encoding produced by [`Amount::to_composite`].
    ///
    /// An empty input, or a blank/space-padded currency column paired
    /// with a zero numeral, decodes to the zero value. A blank code with
    /// a non-zero numeral is an `InvalidCurrencyCode` error.
    pub fn from_composite(src: &str) -> AmountResult<Amount> {
        if src.is_empty() {
            return Ok(Amount::default());
        }
        let inner = src.trim_start_matches('(').trim_end_matches(')');
        let (number, code) = inner
            .split_once(',')
            .ok_or_else(|| AmountError::invalid_number(inner))?;
        let number =
            Decimal::from_str(number).map_err(|_| AmountError::invalid_number(number))?;
        let code = code.trim();
        if code.is_empty() {
            return if number.is_zero() {
                Ok(Amount::default())
            } else {
                Err(AmountError::invalid_currency_code(code))
            };
        }

        Ok(Amount {
            number,
            currency_code: parse_code(code)?,
        })
    }

    /// The currency code shared by a binary operation, or a mismatch error.
    fn combined_code(&self, other: Amount) -> AmountResult<ArrayString<3>> {
        if self.currency_code != other.currency_code
            && !self.currency_code.is_empty()
            && !other.currency_code.is_empty()
        {
            return Err(AmountError::CurrencyMismatch {
                a: *self,
                b: other,
            });
        }
        Ok(if self.currency_code.is_empty() {
            other.currency_code
        } else {
            self.currency_code
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency_code)
    }
}

impl Neg for Amount {
    type Output = Amount;

    #[inline]
    fn neg(self) -> Amount {
        Amount {
            number: -self.number,
            currency_code: self.currency_code,
        }
    }
}

/// Validate a currency code and pack it into its inline representation.
fn parse_code(currency_code: &str) -> AmountResult<ArrayString<3>> {
    if currency_code.is_empty() {
        return Ok(ArrayString::new());
    }
    if !currency::is_valid(currency_code) {
        return Err(AmountError::invalid_currency_code(currency_code));
    }
    ArrayString::from(currency_code)
        .map_err(|_| AmountError::invalid_currency_code(currency_code))
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Amount;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct AmountRepr {
        number: String,
        currency: String,
    }

    impl Serialize for Amount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Amount", 2)?;
            state.serialize_field("number", &self.number())?;
            state.serialize_field("currency", self.currency_code())?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = AmountRepr::deserialize(deserializer)?;
            Amount::new(&repr.number, &repr.currency).map_err(D::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
