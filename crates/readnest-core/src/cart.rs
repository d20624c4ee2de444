//! # Cart Module
//!
//! A single user's accumulated selections pending checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Shell Action             Core Operation          Cart State Change     │
//! │  ────────────             ──────────────          ─────────────────     │
//! │                                                                         │
//! │  Buy book ──────────────► catalog.purchase() ───► (stock - 1)          │
//! │                                │ ok: CartItem                           │
//! │                                ▼                                        │
//! │                           cart.add(item) ───────► items.push(item)     │
//! │                                                                         │
//! │  View cart ─────────────► cart.items() ─────────► (read only)          │
//! │                           cart.total()            (recomputed fresh)    │
//! │                                                                         │
//! │  Confirm checkout ──────► Receipt::from_cart                            │
//! │                           cart.clear() ─────────► items.clear()        │
//! │                                                                         │
//! │  Cancel checkout ───────► (nothing) ────────────► cart untouched       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A cart belongs to exactly one [`crate::types::User`] and is not designed
//! for concurrent access. Only the catalog carries a lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Book;

// =============================================================================
// Cart Item
// =============================================================================

/// A purchased copy sitting in the cart.
///
/// ## Design Notes
/// - `book_id`: The catalog-issued id (for later lookup or display)
/// - Everything else is a frozen snapshot taken at purchase time.
///   The cart's total stays correct even if the catalog record is
///   edited afterwards - there is no aliasing between catalog and cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the catalog record this copy was purchased from.
    pub book_id: String,

    /// Title at time of purchase (frozen).
    pub title: String,

    /// Author at time of purchase (frozen).
    pub author: String,

    /// Price in paise at time of purchase (frozen).
    /// This is critical: we lock in the price when the stock check passes.
    pub unit_price_paise: i64,

    /// When this copy was purchased.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshots a book into a cart item.
    ///
    /// Crate-private on purpose: the only way to obtain a `CartItem` is a
    /// successful [`crate::catalog::Catalog::purchase`], which is exactly
    /// the cart's invariant - every item in it has passed a stock check.
    pub(crate) fn from_book(book: &Book) -> Self {
        CartItem {
            book_id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            unit_price_paise: book.price_paise,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of purchased copies.
///
/// ## Invariants
/// - Every item was obtained from a successful purchase; the cart never
///   re-validates stock
/// - Duplicate `book_id`s are fine - each entry is one purchased copy
/// - The total is recomputed on every call, never cached: the cart only
///   mutates via `add`/`clear`, so recompute-on-read needs no invalidation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created (or last cleared).
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a purchased copy. No stock check here - the purchase that
    /// produced the item already did it.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Read-only ordered view of the cart contents.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of copies in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of the frozen prices over all current items, computed fresh.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::unit_price).sum()
    }

    /// Empties the cart. Irreversible; trivially succeeds when already empty.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The order summary produced by a confirmed checkout.
///
/// Checkout itself is deliberately simple: build the receipt, then
/// [`Cart::clear`]. There is no pending-order state and no rollback;
/// cancelling leaves the cart untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Name of the store that issued the receipt.
    pub store_name: String,

    /// Name of the user who checked out.
    pub user_name: String,

    /// The purchased copies, in cart order.
    pub lines: Vec<CartItem>,

    /// Total in paise across all lines.
    pub total_paise: i64,

    /// When the checkout was confirmed.
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    /// Builds a receipt from the current cart contents, stamped with the
    /// issuing store and the checking-out user.
    ///
    /// Rejects empty carts with [`CoreError::EmptyCart`] - the storefront
    /// rule that there is nothing to confirm. Does NOT clear the cart; the
    /// caller does that once the receipt is in hand.
    pub fn from_cart(
        cart: &Cart,
        store_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(Receipt {
            store_name: store_name.into(),
            user_name: user_name.into(),
            lines: cart.items().to_vec(),
            total_paise: cart.total().paise(),
            completed_at: Utc::now(),
        })
    }

    /// The receipt total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(title: &str, price_paise: i64) -> CartItem {
        let book = Book::new(title, "Test Author", Money::from_paise(price_paise), 5);
        CartItem::from_book(&book)
    }

    #[test]
    fn test_cart_add_and_total() {
        let mut cart = Cart::new();
        cart.add(test_item("Clean Code", 59900));
        cart.add(test_item("1984", 34900));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::from_paise(94800));
    }

    #[test]
    fn test_duplicate_copies_are_distinct_entries() {
        let mut cart = Cart::new();
        cart.add(test_item("Clean Code", 59900));
        cart.add(test_item("Clean Code", 59900));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::from_paise(119800));
    }

    #[test]
    fn test_total_is_frozen_against_catalog_edits() {
        let mut book = Book::new("Sapiens", "Yuval Noah Harari", Money::from_paise(54900), 6);
        let mut cart = Cart::new();
        cart.add(CartItem::from_book(&book));

        // A later catalog price change must not leak into the cart.
        book.price_paise = 99900;
        assert_eq!(cart.total(), Money::from_paise(54900));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(test_item("The Hobbit", 49900));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_clear_is_idempotent_on_empty_cart() {
        let mut cart = Cart::new();
        cart.clear();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_receipt_totals_match_cart() {
        let mut cart = Cart::new();
        cart.add(test_item("Atomic Habits", 49900));
        cart.add(test_item("Educated", 49900));

        let receipt = Receipt::from_cart(&cart, "ReadNest", "Guest").unwrap();
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total(), cart.total());
        assert_eq!(receipt.store_name, "ReadNest");
        assert_eq!(receipt.user_name, "Guest");
        // Building a receipt does not clear the cart.
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_receipt_rejects_empty_cart() {
        let cart = Cart::new();
        let err = Receipt::from_cart(&cart, "ReadNest", "Guest").unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_receipt_serializes_to_json() {
        let mut cart = Cart::new();
        cart.add(test_item("Cosmos", 59900));
        let receipt = Receipt::from_cart(&cart, "ReadNest", "Guest").unwrap();

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"total_paise\":59900"));
        // The store and user stamps must survive into the exported JSON.
        assert!(json.contains("\"store_name\":\"ReadNest\""));
        assert!(json.contains("\"user_name\":\"Guest\""));
    }
}
