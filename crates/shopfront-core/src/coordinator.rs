//! # Coordinator
//!
//! Front door of the state engine. Owns the three stores, runs the gate
//! before every gated command, and is the only code that touches more than
//! one store in a single operation.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Command ──► required_operation()?                                      │
//! │                 │                                                       │
//! │                 ├── None (login/logout/currentSession) ──► run          │
//! │                 │                                                       │
//! │                 └── Some(op) ──► authorize(current session, op)         │
//! │                                     │                                   │
//! │                                     ├── Err ──► Denied, no store touched│
//! │                                     └── Ok ───► one store call ──► Ok   │
//! │                                                                         │
//! │  Cross-store sequences (only here):                                     │
//! │    logout          = session.logout() ; cart.clear_cart()               │
//! │    addToCartById   = catalog.get(id)  ; cart.add_to_cart(&snapshot)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations take `&mut self`, so one command is fully applied before the
//! next can start.

use tracing::{debug, info, warn};

use crate::authz::{self, Operation};
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::command::{Command, Outcome};
use crate::error::{StoreError, StoreResult};
use crate::money::Money;
use crate::session::SessionStore;
use crate::types::{CartLine, CartSnapshot, NewProduct, Product, ProductId, ProductPatch, Role, Session};

/// Owns the stores and sequences every command against them.
#[derive(Debug)]
pub struct Coordinator {
    session: SessionStore,
    catalog: CatalogStore,
    cart: CartStore,
}

impl Coordinator {
    /// Builds a coordinator over explicitly constructed stores.
    pub fn new(session: SessionStore, catalog: CatalogStore, cart: CartStore) -> Self {
        Coordinator {
            session,
            catalog,
            cart,
        }
    }

    /// Applies one command.
    pub fn dispatch(&mut self, command: Command) -> StoreResult<Outcome> {
        debug!(kind = command.kind(), "Dispatching command");

        match command {
            Command::Login { user_name, role } => self.login(&user_name, role).map(Outcome::Session),
            Command::Logout => Ok(Outcome::Session(self.logout())),
            Command::CurrentSession => Ok(Outcome::Session(self.current_session())),
            Command::ListProducts => self.list_products().map(Outcome::Products),
            Command::AddProduct {
                name,
                price_cents,
                category,
            } => self
                .add_product(NewProduct {
                    name,
                    price_cents,
                    category,
                })
                .map(Outcome::Product),
            Command::UpdateProduct {
                id,
                name,
                price_cents,
                category,
            } => self
                .update_product(
                    id,
                    ProductPatch {
                        name,
                        price_cents,
                        category,
                    },
                )
                .map(Outcome::Product),
            Command::RemoveProduct { id } => self.remove_product(id).map(|removed| Outcome::ProductRemoved {
                id,
                removed: removed.is_some(),
            }),
            Command::AddToCart { product } => self.add_to_cart(&product).map(Outcome::CartLine),
            Command::AddToCartById { product_id } => self.add_to_cart_by_id(product_id).map(Outcome::CartLine),
            Command::RemoveFromCart { product_id } => {
                self.remove_from_cart(product_id)
                    .map(|removed| Outcome::CartLineRemoved {
                        product_id,
                        removed: removed.is_some(),
                    })
            }
            Command::SetCartQuantity {
                product_id,
                quantity,
            } => self.set_cart_quantity(product_id, quantity).map(Outcome::CartLine),
            Command::ViewCart => self.view_cart().map(Outcome::Cart),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs in. Ungated; the role is taken at the caller's word.
    pub fn login(&mut self, user_name: &str, role: Role) -> StoreResult<Session> {
        self.session.login(user_name, role)
    }

    /// Logs out and empties the cart, in that order.
    ///
    /// Both steps finish before this returns; no command can observe a
    /// logged-out session with a non-empty cart.
    pub fn logout(&mut self) -> Session {
        let session = self.session.logout();
        self.cart.clear_cart();
        info!("Logged out; cart cleared");
        session
    }

    /// Snapshot of the session. Ungated.
    pub fn current_session(&self) -> Session {
        self.session.current_session()
    }

    /// Operations the current session may perform.
    pub fn permitted_operations(&self) -> Vec<Operation> {
        authz::permitted_operations(self.session.session_ref())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn list_products(&self) -> StoreResult<Vec<Product>> {
        self.gate(Operation::ReadCatalog)?;
        Ok(self.catalog.list_products())
    }

    pub fn add_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        self.gate(Operation::AddProduct)?;
        self.catalog.add_product(new)
    }

    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> StoreResult<Product> {
        self.gate(Operation::UpdateProduct)?;
        self.catalog.update_product(id, patch)
    }

    /// Removes a product. Matching cart lines are left in place.
    pub fn remove_product(&mut self, id: ProductId) -> StoreResult<Option<Product>> {
        self.gate(Operation::RemoveProduct)?;
        Ok(self.catalog.remove_product(id))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit using the snapshot the caller supplies.
    pub fn add_to_cart(&mut self, product: &Product) -> StoreResult<CartLine> {
        self.gate(Operation::AddToCart)?;
        self.cart.add_to_cart(product)
    }

    /// Adds one unit using a fresh catalog snapshot of the product.
    pub fn add_to_cart_by_id(&mut self, product_id: ProductId) -> StoreResult<CartLine> {
        self.gate(Operation::AddToCart)?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::product_not_found(product_id))?;
        self.cart.add_to_cart(&product)
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> StoreResult<Option<CartLine>> {
        self.gate(Operation::RemoveFromCart)?;
        Ok(self.cart.remove_from_cart(product_id))
    }

    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: i64) -> StoreResult<CartLine> {
        self.gate(Operation::SetCartQuantity)?;
        self.cart.set_quantity(product_id, quantity)
    }

    pub fn view_cart(&self) -> StoreResult<CartSnapshot> {
        self.gate(Operation::ReadCart)?;
        Ok(self.cart.snapshot())
    }

    pub fn cart_total(&self) -> StoreResult<Money> {
        self.gate(Operation::ReadCart)?;
        Ok(self.cart.cart_total())
    }

    /// Checks the current session, every time.
    fn gate(&self, operation: Operation) -> StoreResult<()> {
        authz::authorize(self.session.session_ref(), operation).map_err(|err| {
            warn!(%operation, error = %err, "Command denied");
            err
        })
    }
}
