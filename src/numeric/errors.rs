// ============================================================================
// Validation Errors
// Error types for canonical quantity validation
// ============================================================================

use std::fmt;

/// Range violations reported for a well-shaped canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// Value is below zero
    Negative,
    /// Integer part has more digits than the field allows
    IntegerOverflow { max_digits: u32 },
    /// Fractional part has more digits than the field scale
    FractionOverflow { max_digits: u32 },
}

/// Errors raised when a canonical value cannot be committed.
///
/// Parsing never produces these; only validation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Input is not a plain `digits[.digits]` string
    Format,
    /// Input is a number but outside the field's range
    Range(RangeViolation),
}

impl ValidationError {
    /// Returns true for any `Range` variant.
    #[inline]
    pub const fn is_range_error(&self) -> bool {
        matches!(self, ValidationError::Range(_))
    }

    /// Message shown to the end user (Turkish).
    pub fn localized_message(&self) -> String {
        match self {
            ValidationError::Format => "Geçerli bir sayı formatı kullanın.".to_string(),
            ValidationError::Range(RangeViolation::Negative) => {
                "Miktar sıfırdan küçük olamaz.".to_string()
            },
            ValidationError::Range(RangeViolation::IntegerOverflow { max_digits }) => {
                format!("Tam sayı kısmı en fazla {} basamak olabilir.", max_digits)
            },
            ValidationError::Range(RangeViolation::FractionOverflow { max_digits }) => {
                format!("En fazla {} ondalık basamak girebilirsiniz.", max_digits)
            },
        }
    }
}

impl From<RangeViolation> for ValidationError {
    fn from(violation: RangeViolation) -> Self {
        ValidationError::Range(violation)
    }
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::Negative => write!(f, "quantity cannot be negative"),
            RangeViolation::IntegerOverflow { max_digits } => {
                write!(f, "integer part exceeds {} digits", max_digits)
            },
            RangeViolation::FractionOverflow { max_digits } => {
                write!(f, "fractional part exceeds {} digits", max_digits)
            },
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Format => {
                write!(f, "format error: expected digits with an optional '.' fraction")
            },
            ValidationError::Range(violation) => write!(f, "range error: {}", violation),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Range(RangeViolation::IntegerOverflow { max_digits: 10 }).to_string(),
            "range error: integer part exceeds 10 digits"
        );
        assert_eq!(
            ValidationError::Range(RangeViolation::Negative).to_string(),
            "range error: quantity cannot be negative"
        );
    }

    #[test]
    fn test_localized_message() {
        assert_eq!(
            ValidationError::Format.localized_message(),
            "Geçerli bir sayı formatı kullanın."
        );
        assert_eq!(
            ValidationError::from(RangeViolation::FractionOverflow { max_digits: 3 })
                .localized_message(),
            "En fazla 3 ondalık basamak girebilirsiniz."
        );
    }

    #[test]
    fn test_is_range_error() {
        assert!(!ValidationError::Format.is_range_error());
        assert!(ValidationError::from(RangeViolation::Negative).is_range_error());
    }
}
