// ============================================================================
// Numeric Module
// Locale-aware fixed-point quantities for Decimal(13,3) wire fields
// ============================================================================
//
// This module provides:
// - DecimalFormat: field precision/scale and display separators
// - LocaleDecimalCodec: display <-> canonical conversion and validation
// - ValidationError: typed rejection reasons for canonical values
// - Quantity: validated decimal value for outbound payloads
//
// Design principles:
// - Parsing is total: bad input degrades, it never errors
// - Validation is partial: it is the only place values are rejected
// - No floating-point operations
// - No shared state; every call is independent

mod codec;
mod errors;
mod locale;
mod quantity;

pub use codec::{format, parse, parse_strict, validate, LocaleDecimalCodec};
pub use errors::{RangeViolation, ValidationError, ValidationResult};
pub use locale::DecimalFormat;
pub use quantity::Quantity;
