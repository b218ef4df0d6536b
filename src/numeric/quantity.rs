// ============================================================================
// Quantity
// Validated Decimal(13,3) value ready for an outbound payload
// ============================================================================

use super::codec;
use super::errors::{RangeViolation, ValidationError, ValidationResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Non-negative quantity with exactly 3 fraction digits and at most 10
/// integer digits.
///
/// Every `Quantity` has passed [`codec::validate`]; holding one is proof the
/// value fits the wire field.
///
/// # Example
/// ```
/// use quantity_codec::numeric::Quantity;
///
/// let qty = Quantity::from_display("1.450,45");
/// assert_eq!(qty.to_canonical(), "1450.450");
/// assert_eq!(qty.to_display(), "1.450,450");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Fraction digits
    pub const SCALE: u32 = 3;

    /// Integer digits allowed before the point
    pub const MAX_INTEGER_DIGITS: u32 = 10;

    /// Zero value, `0.000`
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, Self::SCALE));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a canonical string such as `1450.450`.
    ///
    /// # Errors
    /// Any [`ValidationError`] reported by [`codec::validate`].
    pub fn from_canonical(canonical: &str) -> ValidationResult<Self> {
        codec::validate(canonical)?;
        let mut value = Decimal::from_str(canonical).map_err(|_| ValidationError::Format)?;
        value.rescale(Self::SCALE);
        Ok(Self(value))
    }

    /// Build from user input in display form. Never fails; malformed input
    /// reads as its sanitized digits or zero.
    pub fn from_display(display: &str) -> Self {
        let canonical = codec::parse(display);
        Self::from_canonical(&canonical).unwrap_or_else(|err| {
            tracing::error!(%canonical, %err, "parsed quantity failed validation");
            Self::ZERO
        })
    }

    /// Build from a decimal value.
    ///
    /// Trailing zeros beyond the scale are accepted (`1.5000` is `1.500`).
    ///
    /// # Errors
    /// - `Range(Negative)` below zero
    /// - `Range(FractionOverflow)` for significant digits past the scale
    /// - `Range(IntegerOverflow)` for more than 10 integer digits
    pub fn from_decimal(value: Decimal) -> ValidationResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RangeViolation::Negative.into());
        }

        if value.normalize().scale() > Self::SCALE {
            return Err(RangeViolation::FractionOverflow {
                max_digits: Self::SCALE,
            }
            .into());
        }

        let integer_digits = value.trunc().abs().normalize().to_string().len() as u32;
        if integer_digits > Self::MAX_INTEGER_DIGITS {
            return Err(RangeViolation::IntegerOverflow {
                max_digits: Self::MAX_INTEGER_DIGITS,
            }
            .into());
        }

        let mut value = value.abs();
        value.rescale(Self::SCALE);
        Ok(Self(value))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Underlying decimal (scale 3).
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }

    /// Wire form, e.g. `1450.450`
    pub fn to_canonical(&self) -> String {
        self.0.to_string()
    }

    /// Display form, e.g. `1.450,450`
    pub fn to_display(&self) -> String {
        codec::format(&self.to_canonical())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Quantity {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({})", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    /// Parse a canonical string. Use [`Quantity::from_display`] for user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

// ============================================================================
// Serde (Edm.Decimal travels as a JSON string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_canonical(&raw).map_err(serde::de::Error::custom)
    }
}
