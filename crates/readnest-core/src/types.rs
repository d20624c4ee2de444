//! # Domain Types
//!
//! Core domain types used throughout ReadNest.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Book       │   │      User       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (UUID)      │   │  name           │                             │
//! │  │  title          │   │  cart (owned)   │                             │
//! │  │  author         │   └─────────────────┘                             │
//! │  │  price_paise    │                                                   │
//! │  │  stock          │   One User per session, one Cart per User.        │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every book has:
//! - `id`: UUID v4 - immutable, the only handle carts and callers hold
//! - Display identity: (title, author) - human-readable, may repeat across
//!   distinct stock units by design

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{
    validate_author, validate_price_paise, validate_stock, validate_title, validate_user_name,
};

// =============================================================================
// Book
// =============================================================================

/// A book available for purchase.
///
/// Identity fields (`id`, `title`, `author`, `price_paise`) are set once at
/// catalog load time. `stock` is the only mutable field and is updated
/// exclusively through [`crate::catalog::Catalog::purchase`]; it never goes
/// below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier (UUID v4). Catalog-issued; carts store this id
    /// instead of holding references into the catalog.
    pub id: String,

    /// Title shown in listings and on receipts.
    pub title: String,

    /// Author shown in listings and on receipts.
    pub author: String,

    /// Price in paise (smallest currency unit).
    pub price_paise: i64,

    /// Remaining purchasable units. Invariant: never negative.
    pub stock: i64,
}

impl Book {
    /// Creates a new book with a generated id.
    ///
    /// ## Example
    /// ```rust
    /// use readnest_core::{Book, Money};
    ///
    /// let book = Book::new("Clean Code", "Robert C. Martin", Money::from_rupees(599, 0), 2);
    /// assert_eq!(book.stock, 2);
    /// ```
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: Money, stock: i64) -> Self {
        Book {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            price_paise: price.paise(),
            stock,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Checks whether at least one unit remains.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Listing format matching the storefront display:
/// `Clean Code by Robert C. Martin - ₹599.00 (2 in stock)`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} - {} ({} in stock)",
            self.title,
            self.author,
            self.price(),
            self.stock
        )
    }
}

// =============================================================================
// User
// =============================================================================

/// A session identity owning exactly one cart.
///
/// ## Ownership
/// The cart is exclusively owned by its user and is NOT designed for
/// concurrent access; a session lives on a single thread of control. Only
/// the catalog is shared (see [`crate::catalog::SharedCatalog`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
    cart: Cart,
}

impl User {
    /// Creates a user with an empty cart. The name must be non-empty.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_user_name(&name)?;
        Ok(User {
            name,
            cart: Cart::new(),
        })
    }

    /// The session display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the user's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Write access to the user's cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

// =============================================================================
// Construction-Time Validation
// =============================================================================

/// Validates a book's identity fields before it enters the catalog.
///
/// Used by [`crate::catalog::Catalog::add`]; kept here next to the type so
/// the rules and the fields live together.
pub(crate) fn validate_book(book: &Book) -> CoreResult<()> {
    validate_title(&book.title)?;
    validate_author(&book.author)?;
    validate_price_paise(book.price_paise)?;
    validate_stock(book.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new_generates_unique_ids() {
        let a = Book::new("1984", "George Orwell", Money::from_rupees(349, 0), 7);
        let b = Book::new("1984", "George Orwell", Money::from_rupees(349, 0), 7);
        // Same title and author, distinct stock units
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("Clean Code", "Robert C. Martin", Money::from_rupees(599, 0), 2);
        assert_eq!(
            book.to_string(),
            "Clean Code by Robert C. Martin - ₹599.00 (2 in stock)"
        );
    }

    #[test]
    fn test_book_in_stock() {
        let mut book = Book::new("Cosmos", "Carl Sagan", Money::from_rupees(599, 0), 1);
        assert!(book.in_stock());
        book.stock = 0;
        assert!(!book.in_stock());
    }

    #[test]
    fn test_user_owns_empty_cart() {
        let user = User::new("Guest").unwrap();
        assert_eq!(user.name(), "Guest");
        assert!(user.cart().is_empty());
    }

    #[test]
    fn test_user_name_required() {
        assert!(User::new("").is_err());
        assert!(User::new("   ").is_err());
    }

    #[test]
    fn test_validate_book_rejects_negative_stock() {
        let mut book = Book::new("Educated", "Tara Westover", Money::from_rupees(499, 0), 4);
        assert!(validate_book(&book).is_ok());

        book.stock = -1;
        assert!(validate_book(&book).is_err());
    }
}
