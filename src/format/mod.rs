// ============================================================================
// Format module
// CLDR-driven currency formatting and parsing
// ============================================================================

mod digits;
mod formatter;
mod number_format;

pub use formatter::{CurrencyDisplay, Formatter};
