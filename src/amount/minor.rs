// ============================================================================
// MinorAmount
// Integer minor-unit view over Amount
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use rust_decimal::Decimal;

use super::amount::Amount;
use super::errors::{AmountError, AmountResult};
use super::rounding::RoundingMode;
#[cfg(feature = "serde")]
use crate::currency;

/// An amount expressed in integer minor units ("2099" rather than "20.99").
///
/// Wraps [`Amount`], so arithmetic and comparison behave identically; only
/// the textual and serialized representations differ. Useful at boundaries
/// with payment processors that exchange integer cent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinorAmount(Amount);

impl MinorAmount {
    /// Create a minor-unit amount from an integer string and a currency code.
    ///
    /// `MinorAmount::new("2099", "USD")` represents 20.99 USD. Unlike
    /// [`Amount::new`], the currency code is required because the
    /// currency's fraction digit count determines the unit.
    ///
    /// # Errors
    /// `InvalidNumber` if the string is not a plain integer,
    /// `InvalidCurrencyCode` if the code is empty or unknown.
    pub fn new(n: &str, currency_code: &str) -> AmountResult<MinorAmount> {
        let units: i64 = n.parse().map_err(|_| AmountError::invalid_number(n))?;
        Amount::from_minor_units(units, currency_code).map(MinorAmount)
    }

    /// Wrap an existing amount without rounding it.
    #[inline]
    pub fn from_amount(amount: Amount) -> MinorAmount {
        MinorAmount(amount)
    }

    /// The underlying decimal amount.
    #[inline]
    pub fn to_amount(&self) -> Amount {
        self.0
    }

    /// The number of minor units as a string, e.g. "2099".
    pub fn number(&self) -> String {
        self.minor_units().to_string()
    }

    #[inline]
    pub fn currency_code(&self) -> &str {
        self.0.currency_code()
    }

    #[inline]
    pub fn minor_units(&self) -> i128 {
        self.0.minor_units()
    }

    pub fn convert(&self, currency_code: &str, rate: &str) -> AmountResult<MinorAmount> {
        self.0.convert(currency_code, rate).map(MinorAmount)
    }

    pub fn add(&self, other: MinorAmount) -> AmountResult<MinorAmount> {
        self.0.add(other.0).map(MinorAmount)
    }

    pub fn sub(&self, other: MinorAmount) -> AmountResult<MinorAmount> {
        self.0.sub(other.0).map(MinorAmount)
    }

    pub fn mul(&self, n: &str) -> AmountResult<MinorAmount> {
        self.0.mul(n).map(MinorAmount)
    }

    pub fn div(&self, n: &str) -> AmountResult<MinorAmount> {
        self.0.div(n).map(MinorAmount)
    }

    pub fn round(&self) -> MinorAmount {
        MinorAmount(self.0.round())
    }

    pub fn round_to(&self, digits: u8, mode: RoundingMode) -> MinorAmount {
        MinorAmount(self.0.round_to(digits, mode))
    }

    pub fn cmp(&self, other: MinorAmount) -> AmountResult<Ordering> {
        self.0.cmp(other.0)
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Compact binary encoding: the 3-byte currency code followed by the
    /// minor-unit integer string.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = String::with_capacity(3 + 24);
        buf.push_str(self.currency_code());
        buf.push_str(&self.number());

        buf.into_bytes()
    }

    /// Decode the encoding produced by [`MinorAmount::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> AmountResult<MinorAmount> {
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

        MinorAmount::new(number, code)
    }
}

impl fmt::Display for MinorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.currency_code())
    }
}

#[cfg(feature = "serde")]
impl MinorAmount {
    /// Reconstruct from an i128 unit count, used by deserialization. The
    /// currency must be valid so its digit count is available.
    fn from_units(units: i128, currency_code: &str) -> AmountResult<MinorAmount> {
        let digits = currency::get_digits(currency_code)
            .ok_or_else(|| AmountError::invalid_currency_code(currency_code))?;
        let number = Decimal::from_i128_with_scale(units, u32::from(digits));
        Amount::new(&number.to_string(), currency_code).map(MinorAmount)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::MinorAmount;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct MinorAmountRepr {
        amount: i128,
        currency: String,
    }

    impl Serialize for MinorAmount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("MinorAmount", 2)?;
            state.serialize_field("amount", &self.minor_units())?;
            state.serialize_field("currency", self.currency_code())?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for MinorAmount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = MinorAmountRepr::deserialize(deserializer)?;
            MinorAmount::from_units(repr.amount, &repr.currency).map_err(D::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
