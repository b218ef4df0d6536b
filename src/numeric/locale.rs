// ============================================================================
// Decimal Format Configuration
// Field precision and display separators for the locale codec
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision `rust_decimal` can hold
const MAX_SUPPORTED_PRECISION: u32 = 28;

/// Shape of a fixed-point decimal field and how it is shown to users.
///
/// The canonical (wire) form always uses `.` as the decimal point and no
/// grouping. The display form uses the configured separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalFormat {
    /// Total digit budget (integer + fraction)
    pub precision: u32,

    /// Digits after the decimal point
    pub scale: u32,

    /// Thousands separator in the display form
    pub grouping_separator: char,

    /// Decimal separator in the display form
    pub decimal_separator: char,
}

impl DecimalFormat {
    /// Create a format with Turkish separators (`.` grouping, `,` decimal)
    pub const fn new(precision: u32, scale: u32) -> Self {
        Self {
            precision,
            scale,
            grouping_separator: '.',
            decimal_separator: ',',
        }
    }

    /// Builder method: Set display separators
    pub const fn with_separators(mut self, grouping: char, decimal: char) -> Self {
        self.grouping_separator = grouping;
        self.decimal_separator = decimal;
        self
    }

    /// Digits allowed before the decimal point
    #[inline]
    pub const fn max_integer_digits(&self) -> u32 {
        self.precision.saturating_sub(self.scale)
    }

    /// Display rendering of zero, e.g. `0,000`
    pub fn zero_display(&self) -> String {
        format!("0{}{}", self.decimal_separator, "0".repeat(self.scale as usize))
    }

    /// Canonical rendering of zero, e.g. `0.000`
    pub fn zero_canonical(&self) -> String {
        format!("0.{}", "0".repeat(self.scale as usize))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.scale == 0 {
            return Err("Scale must be positive".to_string());
        }

        if self.scale >= self.precision {
            return Err("Precision must leave at least one integer digit".to_string());
        }

        if self.precision > MAX_SUPPORTED_PRECISION {
            return Err(format!(
                "Precision cannot exceed {}",
                MAX_SUPPORTED_PRECISION
            ));
        }

        if self.grouping_separator == self.decimal_separator {
            return Err("Grouping and decimal separators must differ".to_string());
        }

        if self.grouping_separator.is_ascii_digit() || self.decimal_separator.is_ascii_digit() {
            return Err("Separators cannot be digits".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl DecimalFormat {
    /// OData `Edm.Decimal(13,3)` quantity field shown in Turkish locale
    /// - Precision: 13, scale: 3
    /// - `1.450,450` on screen, `1450.450` on the wire
    pub const fn turkish() -> Self {
        Self::new(13, 3)
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::turkish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_preset() {
        let format = DecimalFormat::turkish();

        assert_eq!(format.precision, 13);
        assert_eq!(format.scale, 3);
        assert_eq!(format.max_integer_digits(), 10);
        assert_eq!(format.zero_display(), "0,000");
        assert_eq!(format.zero_canonical(), "0.000");
        assert!(format.validate().is_ok());
        assert_eq!(format, DecimalFormat::default());
    }

    #[test]
    fn test_builder_pattern() {
        let format = DecimalFormat::new(15, 2).with_separators(',', '.');

        assert_eq!(format.grouping_separator, ',');
        assert_eq!(format.decimal_separator, '.');
        assert_eq!(format.max_integer_digits(), 13);
        assert_eq!(format.zero_display(), "0.00");
    }

    #[test]
    fn test_validation() {
        assert!(DecimalFormat::new(13, 0).validate().is_err());
        assert!(DecimalFormat::new(3, 4).validate().is_err());
        // No room for the integer digit of zero
        assert!(DecimalFormat::new(3, 3).validate().is_err());
        assert!(DecimalFormat::new(4, 3).validate().is_ok());
        assert!(DecimalFormat::new(40, 3).validate().is_err());
        assert!(DecimalFormat::turkish()
            .with_separators(',', ',')
            .validate()
            .is_err());
        assert!(DecimalFormat::turkish()
            .with_separators('1', ',')
            .validate()
            .is_err());
    }
}
