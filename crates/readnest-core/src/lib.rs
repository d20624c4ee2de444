//! # readnest-core: Pure Business Logic for ReadNest
//!
//! This crate is the **heart** of the ReadNest bookstore. It contains all
//! business logic as pure in-memory operations with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ReadNest Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront Shell (apps/storefront)              │   │
//! │  │    Welcome ──► Browse ──► Cart View ──► Checkout ──► Confirmed  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ readnest-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   cart    │   │   │
//! │  │   │   Book    │  │   Money   │  │  Catalog  │  │   Cart    │   │   │
//! │  │   │   User    │  │  (paise)  │  │ purchase  │  │  Receipt  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   flow    │  │ validation│                                 │   │
//! │  │   │  Screen   │  │   rules   │                                 │   │
//! │  │   │ StoreFlow │  │  checks   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DISPLAY TOOLKIT • PURE IN-MEMORY STATE            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Book`], [`User`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The shared book catalog and the purchase operation
//! - [`cart`] - A user's cart, cart items, and checkout receipts
//! - [`flow`] - The explicit screen state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in paise (i64), never floats
//! 2. **No Aliasing**: The catalog owns stock-bearing records; carts hold
//!    book ids plus price snapshots, never shared references
//! 3. **Serialized Purchases**: The check-then-decrement on stock is a single
//!    critical section per catalog instance
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use readnest_core::{Cart, Catalog, Book, Money};
//!
//! let mut catalog = Catalog::new();
//! let book = Book::new("Clean Code", "Robert C. Martin", Money::from_rupees(599, 0), 2);
//! let id = book.id.clone();
//! catalog.add(book).unwrap();
//!
//! let mut cart = Cart::new();
//! let item = catalog.purchase(&id).unwrap();
//! cart.add(item);
//!
//! assert_eq!(cart.total(), Money::from_rupees(599, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod flow;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use readnest_core::Money` instead of
// `use readnest_core::money::Money`

pub use cart::{Cart, CartItem, Receipt};
pub use catalog::{Catalog, SharedCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use flow::{Screen, StoreFlow};
pub use money::Money;
pub use types::{Book, User};
