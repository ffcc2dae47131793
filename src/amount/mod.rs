// ============================================================================
// Amount module
// Currency-aware decimal arithmetic
// ============================================================================

mod amount;
mod errors;
mod minor;
mod rounding;

pub use amount::Amount;
pub use errors::{AmountError, AmountResult};
pub use minor::MinorAmount;
pub use rounding::RoundingMode;
