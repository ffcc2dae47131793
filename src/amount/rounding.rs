// ============================================================================
// Rounding Modes
// Deterministic tie-break rules for quantizing amounts
// ============================================================================

use rust_decimal::RoundingStrategy;

/// How an amount is rounded when quantized to a fraction digit count.
///
/// Each mode is a tie-break rule applied to the first discarded digit,
/// operating on the magnitude: the sign is preserved and only matters in
/// the "away from / toward zero" sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round away from zero if the next digit is >= 5.
    #[default]
    HalfUp,
    /// Round away from zero if the next digit is > 5; exactly 5 rounds
    /// toward zero.
    HalfDown,
    /// Round away from zero on any nonzero remainder.
    Up,
    /// Truncate toward zero.
    Down,
    /// Round ties to the nearest even digit (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    #[inline]
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}
