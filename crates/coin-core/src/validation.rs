//! # Validation Module
//!
//! Converts coin counts arriving from the outside world (CLI flags, player
//! request lines, JSON numbers) into the `u32` the solver works with.
//! Amount conversion lives on [`Money`](crate::money::Money) itself.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Wire / CLI text                                              │
//! │  └── parse_count("1692"), Money::parse_dollars("100.54")               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed values                                                 │
//! │  └── Target { count: u32, amount: Money }                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: solve()                                                      │
//! │  └── only ever sees integer coins and integer cents                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Parses a coin count from text.
///
/// ## Example
/// ```rust
/// use coin_core::validation::parse_count;
///
/// assert_eq!(parse_count(" 1692 ").unwrap(), 1692);
/// assert!(parse_count("-3").is_err());
/// assert!(parse_count("12.5").is_err());
/// ```
pub fn parse_count(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "count".to_string(),
        });
    }
    if text.starts_with('-') {
        return Err(ValidationError::Negative {
            field: "count".to_string(),
        });
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "count".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    text.parse::<u32>().map_err(|_| count_out_of_range())
}

/// Validates a coin count that arrived as a signed integer (e.g. JSON).
pub fn validate_count(value: i64) -> ValidationResult<u32> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: "count".to_string(),
        });
    }

    u32::try_from(value).map_err(|_| count_out_of_range())
}

fn count_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "count".to_string(),
        min: 0,
        max: u64::from(u32::MAX),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("1692").unwrap(), 1692);
        assert_eq!(parse_count("4294967295").unwrap(), u32::MAX);

        assert!(matches!(parse_count(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_count("-1"), Err(ValidationError::Negative { .. })));
        assert!(matches!(
            parse_count("1,000"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_count("4294967296"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(7).unwrap(), 7);
        assert!(matches!(validate_count(-7), Err(ValidationError::Negative { .. })));
        assert!(matches!(
            validate_count(i64::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
