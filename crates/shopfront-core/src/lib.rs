//! # shopfront-core: State Engine for the Shopfront Demo
//!
//! Session, catalog and cart state for a small storefront, gated by role and
//! kept consistent by a single coordinator. Everything here is in-memory and
//! synchronous; there is no I/O in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 UI layer (web front end / console)              │   │
//! │  │       Login form ──► Catalog ──► Admin panel ──► Cart          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command (closed enum)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │                  ┌──────────────────────────┐                   │   │
//! │  │                  │       Coordinator        │                   │   │
//! │  │                  │  gate ─► one store ─►    │                   │   │
//! │  │                  │  cross-store sequencing  │                   │   │
//! │  │                  └────┬────────┬────────┬───┘                   │   │
//! │  │                       │        │        │                       │   │
//! │  │   ┌───────────┐  ┌────▼────┐ ┌─▼──────┐ ┌▼─────────┐            │   │
//! │  │   │   authz   │  │ Session │ │Catalog │ │   Cart   │            │   │
//! │  │   │ can_      │  │  Store  │ │ Store  │ │  Store   │            │   │
//! │  │   │ perform() │  └─────────┘ └────────┘ └──────────┘            │   │
//! │  │   └───────────┘                                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • STORES NEVER TOUCH EACH OTHER           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Data model (Session, Product, CartLine, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Store and validation error types
//! - [`validation`] - Field validation rules
//! - [`session`] - Authentication/role store
//! - [`catalog`] - Product catalog store
//! - [`cart`] - Shopping cart store
//! - [`authz`] - Role gate
//! - [`command`] - Command vocabulary and outcomes
//! - [`coordinator`] - The only place where stores are sequenced together
//!
//! ## Trust Boundary
//! Roles are asserted by the client at login and prices arrive with the
//! product snapshot on `addToCart`. Nothing here verifies either against a
//! server; there is no server. A snapshot must still be a well-formed
//! product: non-empty name, price within `0..=MAX_PRICE_CENTS`.
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{CartStore, CatalogStore, Coordinator, NewProduct, Role, SessionStore};
//!
//! let mut shop = Coordinator::new(SessionStore::new(), CatalogStore::seeded(), CartStore::new());
//!
//! shop.login("alice", Role::Admin).unwrap();
//! let mouse = shop
//!     .add_product(NewProduct::new("Mouse", 2500, "Electronics"))
//!     .unwrap();
//! assert_eq!(mouse.id, 5);
//!
//! shop.add_to_cart(&mouse).unwrap();
//! shop.add_to_cart(&mouse).unwrap();
//! assert_eq!(shop.view_cart().unwrap().summary.total_cents, 5000);
//!
//! shop.logout();
//! assert!(shop.view_cart().unwrap_err().is_denied());
//!
//! shop.login("alice", Role::User).unwrap();
//! assert!(shop.view_cart().unwrap().lines.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod authz;
pub mod cart;
pub mod catalog;
pub mod command;
pub mod coordinator;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use authz::{authorize, can_perform, permitted_operations, DenialReason, Operation};
pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use command::{Command, Outcome};
pub use coordinator::Coordinator;
pub use error::{StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use session::SessionStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents runaway quantities from repeated clicks or a bad
/// `setCartQuantity` value.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest catalog or snapshot price, in cents ($10,000,000.00).
///
/// Keeps `price × MAX_ITEM_QUANTITY` far inside `i64`; cart totals are
/// still summed with checked arithmetic.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum length of a login name, in characters.
pub const MAX_USER_NAME_LEN: usize = 64;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a category label, in characters.
pub const MAX_CATEGORY_LEN: usize = 100;
