// ============================================================================
// Quantity Codec Library
// Turkish-locale formatting, parsing and validation of Decimal(13,3) quantities
// ============================================================================

//! # Quantity Codec
//!
//! Converts material-consumption quantities between what an operator types
//! (`1.450,45`) and what the OData backend stores (`1450.450`, an
//! `Edm.Decimal(13,3)` field).
//!
//! ## Features
//!
//! - **Total parsing**: any keystroke sequence yields a canonical value
//! - **Strict validation** before a value is committed to a payload
//! - **Typed quantity** backed by `rust_decimal`
//! - **Configurable format** for other precisions and separators
//!
//! ## Example
//!
//! ```rust
//! use quantity_codec::prelude::*;
//!
//! // What the operator typed
//! let canonical = parse("1.450,45");
//! assert_eq!(canonical, "1450.450");
//!
//! // Gate the submission
//! validate(&canonical).expect("fits Decimal(13,3)");
//!
//! // Show it back
//! assert_eq!(format(&canonical), "1.450,450");
//!
//! // Typed value for the outbound payload
//! let quantity = Quantity::from_canonical(&canonical).unwrap();
//! assert!(quantity.is_positive());
//! ```

pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        format, parse, parse_strict, validate, DecimalFormat, LocaleDecimalCodec, Quantity,
        RangeViolation, ValidationError, ValidationResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_operator_input_to_payload_value() {
        let typed = "12.500,75";

        let canonical = parse(typed);
        assert_eq!(canonical, "12500.750");
        assert_eq!(validate(&canonical), Ok(()));

        let quantity = Quantity::from_canonical(&canonical).unwrap();
        assert_eq!(quantity.to_display(), format(&canonical));
        assert_eq!(quantity.to_display(), "12.500,750");
    }

    #[test]
    fn test_oversized_input_blocked_before_submission() {
        let typed = "98.765.432.109,5";

        // Lenient path keeps typing alive but corrupts magnitude
        assert_eq!(parse(typed), "9876543210.500");

        // Strict path refuses it
        let err = parse_strict(typed).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Range(RangeViolation::IntegerOverflow { max_digits: 10 })
        );
        assert_eq!(
            err.localized_message(),
            "Tam sayı kısmı en fazla 10 basamak olabilir."
        );
    }

    #[test]
    fn test_display_round_trip() {
        for canonical in ["0.000", "1.001", "999.999", "1000.000", "9999999999.999"] {
            assert_eq!(parse(&format(canonical)), canonical);
        }
    }
}
