//! # Error Types
//!
//! Domain-specific error types for readnest-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  readnest-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront errors (in app)                                             │
//! │  └── ShellError       - What the terminal user sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShellError → Terminal              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (book title, id, screens)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal - every failure is recoverable by the caller

use thiserror::Error;

use crate::flow::Screen;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested book id is not in the catalog.
    ///
    /// ## When This Occurs
    /// Passing an id that the catalog never issued is a programming-contract
    /// violation by the caller. We reject it fail-fast instead of silently
    /// corrupting state.
    #[error("Book not found in catalog: {0}")]
    BookNotFound(String),

    /// A purchase was attempted on a book with zero remaining stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart ("Clean Code")
    ///      │
    ///      ▼
    /// Check stock: 0 remaining
    ///      │
    ///      ▼
    /// OutOfStock { title: "Clean Code" }
    ///      │
    ///      ▼
    /// Shell shows: "Sorry, Clean Code is out of stock!"
    /// ```
    /// The catalog is left untouched; the caller simply does not proceed.
    #[error("{title} is out of stock")]
    OutOfStock { title: String },

    /// Checkout was requested on an empty cart.
    ///
    /// `Cart::clear` itself has no precondition; this guards receipt
    /// creation, mirroring the storefront rule that an empty cart cannot
    /// be checked out.
    #[error("Cart is empty")]
    EmptyCart,

    /// A screen transition that the store flow does not allow.
    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: Screen, to: Screen },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied data doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
