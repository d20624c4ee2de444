//! # Catalog Module
//!
//! The shared collection of purchasable books and the purchase operation.
//!
//! ## The Consistency Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 purchase(): check-then-decrement                        │
//! │                                                                         │
//! │  Two callers racing on a book with stock == 1:                          │
//! │                                                                         │
//! │  Caller A ──► lock ──► stock 1 > 0? yes ──► stock = 0 ──► unlock ──► ok │
//! │  Caller B ──────────────── (blocked) ──────► lock ──► stock 0 > 0? no   │
//! │                                                        └──► OutOfStock  │
//! │                                                                         │
//! │  The WHOLE check-and-decrement is one critical section per catalog      │
//! │  instance. No two callers can both observe stock == 1 and both          │
//! │  decrement past zero.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Layers
//! - [`Catalog`]: the pure collection (`&mut self` operations, no lock).
//!   Single-threaded callers and tests use this directly.
//! - [`SharedCatalog`]: `Arc<Mutex<Catalog>>` wrapper that provides the
//!   serialization guarantee for concurrent callers.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::types::{validate_book, Book};

// =============================================================================
// Catalog
// =============================================================================

/// An ordered collection of books, insertion order preserved for display.
///
/// ## Invariants
/// - Stock never goes below zero; `purchase` is the only stock mutation
/// - No duplicate-identity enforcement: titles may repeat by design,
///   treated as distinct stock units
/// - The catalog never shrinks; out-of-stock books stay listed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Validates and appends a book to the ordered collection.
    pub fn add(&mut self, book: Book) -> CoreResult<()> {
        validate_book(&book)?;
        debug!(id = %book.id, title = %book.title, stock = book.stock, "book added to catalog");
        self.books.push(book);
        Ok(())
    }

    /// Returns the full ordered sequence of books (read-only view).
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by its catalog-issued id.
    pub fn get(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    /// Number of books in the catalog (distinct records, not total stock).
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Checks whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Purchases one copy of the identified book.
    ///
    /// The sole mutating, consistency-critical operation:
    /// - Unknown id → [`CoreError::BookNotFound`], fail fast. Passing an id
    ///   the catalog never issued is a caller bug, not a user condition.
    /// - `stock == 0` → [`CoreError::OutOfStock`], no mutation.
    /// - Otherwise stock is decremented by exactly 1 and a price-frozen
    ///   [`CartItem`] snapshot is returned for the caller to put in a cart.
    ///
    /// No side effects beyond the stock mutation; this never touches a cart.
    /// Composing purchase + cart.add is the caller's responsibility.
    ///
    /// Callers that share a catalog across threads must go through
    /// [`SharedCatalog::purchase`] so the check-then-decrement is serialized.
    pub fn purchase(&mut self, book_id: &str) -> CoreResult<CartItem> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| CoreError::BookNotFound(book_id.to_string()))?;

        if book.stock == 0 {
            warn!(id = %book.id, title = %book.title, "purchase failed: out of stock");
            return Err(CoreError::OutOfStock {
                title: book.title.clone(),
            });
        }

        book.stock -= 1;
        debug!(id = %book.id, title = %book.title, remaining = book.stock, "purchase succeeded");
        Ok(CartItem::from_book(book))
    }
}

// =============================================================================
// Shared Catalog
// =============================================================================

/// Thread-safe handle to a catalog shared between callers.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Catalog>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures the whole check-then-decrement of a purchase runs as
///   one critical section per catalog instance
///
/// ## Why Not RwLock?
/// The hot operation (purchase) is a write, and listing a catalog this size
/// is cheap. A RwLock would add complexity with minimal benefit. A catalog
/// with many books under real contention would want per-record locking or
/// an atomic compare-and-decrement keyed by book id instead.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    /// Wraps a populated catalog for sharing.
    pub fn new(catalog: Catalog) -> Self {
        SharedCatalog {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Purchases one copy of the identified book inside the critical section.
    ///
    /// For a book with stock 1, two racing calls produce exactly one success
    /// and one `OutOfStock`; across any concurrent batch, successes never
    /// exceed the starting stock.
    pub fn purchase(&self, book_id: &str) -> CoreResult<CartItem> {
        let mut catalog = self.inner.lock().expect("Catalog mutex poisoned");
        catalog.purchase(book_id)
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = shared.with_catalog(|c| c.len());
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.inner.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.inner.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }

    /// Clones out the current book list for display.
    ///
    /// A snapshot, not a live view: stock counts shown to a user may be
    /// stale by the time they act, which is why `purchase` re-checks.
    pub fn books(&self) -> Vec<Book> {
        self.with_catalog(|c| c.list().to_vec())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
