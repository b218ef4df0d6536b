// ============================================================================
// Locale Decimal Codec
// Display <-> canonical conversion for fixed-point quantity fields
// ============================================================================
//
// Three contracts, one per direction of travel:
// - format:   canonical -> display, total
// - parse:    display -> canonical, total (sanitizes and truncates)
// - validate: canonical -> Ok / ValidationError, partial
//
// parse never blocks typing; validate blocks submission.

use super::errors::{RangeViolation, ValidationError, ValidationResult};
use super::locale::DecimalFormat;

/// Stateless converter between a locale display string and the canonical
/// fixed-point string sent on the wire.
///
/// # Example
/// ```
/// use quantity_codec::numeric::LocaleDecimalCodec;
///
/// let codec = LocaleDecimalCodec::turkish();
/// assert_eq!(codec.format("1450.45"), "1.450,450");
/// assert_eq!(codec.parse("1.450,450"), "1450.450");
/// assert!(codec.validate("1450.450").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDecimalCodec {
    format: DecimalFormat,
}

/// Integer and fraction digits recovered from user input
struct InputDigits {
    integer: String,
    fraction: String,
}

const TURKISH: LocaleDecimalCodec = LocaleDecimalCodec::turkish();

impl LocaleDecimalCodec {
    /// Create a codec for a custom field format.
    ///
    /// # Errors
    /// Returns the configuration error message if `format` is invalid.
    pub fn new(format: DecimalFormat) -> Result<Self, String> {
        format.validate()?;
        Ok(Self { format })
    }

    /// Codec for `Decimal(13,3)` with Turkish separators.
    pub const fn turkish() -> Self {
        Self {
            format: DecimalFormat::turkish(),
        }
    }

    /// The field format this codec enforces.
    #[inline]
    pub const fn decimal_format(&self) -> &DecimalFormat {
        &self.format
    }

    // ========================================================================
    // Canonical -> Display
    // ========================================================================

    /// Render a canonical value for display.
    ///
    /// Empty input and `"0"` render as zero. Extra fraction digits are cut,
    /// not rounded: `1234567.8901` becomes `1.234.567,890`.
    pub fn format(&self, canonical: &str) -> String {
        if canonical.is_empty() || canonical == "0" {
            return self.format.zero_display();
        }

        let (integer, fraction) = match canonical.split_once('.') {
            Some((integer, rest)) => (integer, rest.split('.').next().unwrap_or("")),
            None => (canonical, ""),
        };

        let scale = self.format.scale as usize;
        let fraction: String = fraction.chars().take(scale).collect();

        format!(
            "{}{}{:0<width$}",
            group_digits(integer, self.format.grouping_separator),
            self.format.decimal_separator,
            fraction,
            width = scale
        )
    }

    // ========================================================================
    // Display -> Canonical
    // ========================================================================

    /// Convert user input into a canonical value. Never fails.
    ///
    /// Grouping separators are dropped, the first decimal separator becomes
    /// `.`, and anything that still is not a plain number is reduced to its
    /// digits and first `.`. Input without any digit yields zero.
    ///
    /// An integer part longer than the field allows keeps only its leading
    /// digits. That changes the magnitude of the value; use
    /// [`parse_strict`](Self::parse_strict) to reject such input instead.
    pub fn parse(&self, display: &str) -> String {
        let Some(digits) = self.read_digits(display) else {
            return self.format.zero_canonical();
        };

        let max_integer = self.format.max_integer_digits() as usize;
        let integer = if digits.integer.len() > max_integer {
            tracing::warn!(
                dropped_digits = digits.integer.len() - max_integer,
                max_integer_digits = max_integer,
                "quantity integer part truncated to its leading digits"
            );
            &digits.integer[..max_integer]
        } else {
            digits.integer.as_str()
        };

        self.canonical(integer, &digits.fraction)
    }

    /// Convert user input into a canonical value, rejecting an integer part
    /// that does not fit the field.
    ///
    /// Sanitization and fraction truncation behave exactly as in
    /// [`parse`](Self::parse).
    ///
    /// # Errors
    /// Returns `Range(IntegerOverflow)` when the integer part is too long.
    pub fn parse_strict(&self, display: &str) -> ValidationResult<String> {
        let Some(digits) = self.read_digits(display) else {
            return Ok(self.format.zero_canonical());
        };

        let max_integer = self.format.max_integer_digits();
        if digits.integer.len() > max_integer as usize {
            return Err(RangeViolation::IntegerOverflow {
                max_digits: max_integer,
            }
            .into());
        }

        Ok(self.canonical(&digits.integer, &digits.fraction))
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that a canonical value may be committed to the wire field.
    ///
    /// Checks run in order: shape, sign, integer digits, fraction digits.
    ///
    /// # Errors
    /// - `Format` unless the value is `[-]digits[.digits]`
    /// - `Range(Negative)` for any value carrying a minus sign
    /// - `Range(IntegerOverflow)` for too many integer digits
    /// - `Range(FractionOverflow)` for more fraction digits than the scale
    pub fn validate(&self, canonical: &str) -> ValidationResult<()> {
        let (negative, unsigned) = match canonical.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, canonical),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        if !is_digit_run(integer) || !fraction.map_or(true, is_digit_run) {
            return Err(ValidationError::Format);
        }

        if negative {
            return Err(RangeViolation::Negative.into());
        }

        let max_integer = self.format.max_integer_digits();
        if integer.len() > max_integer as usize {
            return Err(RangeViolation::IntegerOverflow {
                max_digits: max_integer,
            }
            .into());
        }

        let scale = self.format.scale;
        if fraction.map_or(0, str::len) > scale as usize {
            return Err(RangeViolation::FractionOverflow { max_digits: scale }.into());
        }

        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Normalize separators and sanitize. `None` means the input holds no
    /// digits and reads as zero.
    fn read_digits(&self, display: &str) -> Option<InputDigits> {
        let trimmed = display.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut value: String = trimmed
            .chars()
            .filter(|&c| c != self.format.grouping_separator)
            .collect();
        if let Some(pos) = value.find(self.format.decimal_separator) {
            value.replace_range(pos..pos + self.format.decimal_separator.len_utf8(), ".");
        }

        if !is_plain_number(&value) {
            let sanitized = sanitize(&value);
            tracing::debug!(input = trimmed, sanitized = %sanitized, "sanitized quantity input");
            value = sanitized;
        }

        if !value.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }

        let (integer, fraction) = value.split_once('.').unwrap_or((value.as_str(), ""));
        Some(InputDigits {
            integer: if integer.is_empty() {
                "0".to_string()
            } else {
                integer.to_string()
            },
            fraction: fraction.to_string(),
        })
    }

    /// Join digits as `integer.fraction`, cutting or zero-padding the
    /// fraction to the scale.
    fn canonical(&self, integer: &str, fraction: &str) -> String {
        let scale = self.format.scale as usize;
        let fraction = &fraction[..fraction.len().min(scale)];
        format!("{}.{:0<width$}", integer, fraction, width = scale)
    }
}

impl Default for LocaleDecimalCodec {
    fn default() -> Self {
        Self::turkish()
    }
}

// ============================================================================
// Turkish Field Shortcuts
// ============================================================================

/// Canonical -> display with the `Decimal(13,3)` Turkish codec.
pub fn format(canonical: &str) -> String {
    TURKISH.format(canonical)
}

/// Display -> canonical with the `Decimal(13,3)` Turkish codec.
pub fn parse(display: &str) -> String {
    TURKISH.parse(display)
}

/// Display -> canonical, rejecting integer overflow instead of truncating.
pub fn parse_strict(display: &str) -> ValidationResult<String> {
    TURKISH.parse_strict(display)
}

/// Validate a canonical value against `Decimal(13,3)`.
pub fn validate(canonical: &str) -> ValidationResult<()> {
    TURKISH.validate(canonical)
}

// ============================================================================
// String Helpers
// ============================================================================

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `digits` or `digits.` or `digits.digits`
fn is_plain_number(s: &str) -> bool {
    match s.split_once('.') {
        Some((integer, fraction)) => {
            is_digit_run(integer) && fraction.bytes().all(|b| b.is_ascii_digit())
        },
        None => is_digit_run(s),
    }
}

/// Keep ASCII digits and the first `.`, drop everything else.
fn sanitize(s: &str) -> String {
    let mut seen_point = false;
    s.chars()
        .filter(|&c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Insert `separator` every three digits from the right. A leading sign or
/// other non-digit prefix is kept outside the grouping.
fn group_digits(integer: &str, separator: char) -> String {
    let split = integer
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(integer.len());
    let (prefix, digits) = integer.split_at(split);

    let len = digits.chars().count();
    let mut grouped = String::with_capacity(integer.len() + len / 3);
    grouped.push_str(prefix);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
