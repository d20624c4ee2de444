//! # Validation Module
//!
//! Input validation utilities for ReadNest.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront shell                                              │
//! │  ├── Command parsing (selection exists, index in range)                 │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Field-level rules at catalog load and session start                │
//! │  └── Everything past this point can assume well-formed data             │
//! │                                                                         │
//! │  Defense in depth: both layers catch different mistakes                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use readnest_core::validation::{validate_title, validate_stock};
//!
//! validate_title("Clean Code").unwrap();
//! validate_stock(2).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length accepted for titles and author names.
const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text_field("title", title)
}

/// Validates an author name. Same rules as titles.
pub fn validate_author(author: &str) -> ValidationResult<()> {
    validate_text_field("author", author)
}

/// Validates a session user name. Same rules as titles.
pub fn validate_user_name(name: &str) -> ValidationResult<()> {
    validate_text_field("name", name)
}

fn validate_text_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed: an out-of-stock book still appears in listings
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Clean Code").is_ok());
        assert!(validate_title("  The Hobbit  ").is_ok());

        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_author() {
        assert!(validate_author("Robert C. Martin").is_ok());
        assert!(validate_author("").is_err());
    }

    #[test]
    fn test_validate_price_paise() {
        assert!(validate_price_paise(0).is_ok());
        assert!(validate_price_paise(59900).is_ok());
        assert!(validate_price_paise(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(7).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
