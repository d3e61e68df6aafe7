//! # Commands
//!
//! The closed vocabulary the UI layer may send, and what comes back.
//!
//! ## Wire Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command (tag: "kind", camelCase fields)                                │
//! │                                                                         │
//! │  {"kind":"login","userName":"alice","role":"admin"}                     │
//! │  {"kind":"addProduct","name":"Mouse","priceCents":2500,                 │
//! │   "category":"Electronics"}                                             │
//! │  {"kind":"updateProduct","id":2,"priceCents":54900}                     │
//! │  {"kind":"addToCartById","productId":5}                                 │
//! │  {"kind":"logout"}                                                      │
//! │                                                                         │
//! │  Outcome (tag: "kind", payload: "data")                                 │
//! │                                                                         │
//! │  {"kind":"product","data":{"id":5,"name":"Mouse",...}}                  │
//! │  {"kind":"cart","data":{"lines":[...],"summary":{...}}}                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown kinds or missing fields fail at decode time; there is no
//! run-time shape checking past this point.

use serde::{Deserialize, Serialize};

use crate::authz::Operation;
use crate::types::{CartLine, CartSnapshot, NewProduct, Product, ProductId, Role, Session};

/// A request from the UI layer.
///
/// `clearCart` is deliberately absent: the cart is only emptied by the
/// coordinator as part of `logout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    Login { user_name: String, role: Role },

    Logout,

    CurrentSession,

    ListProducts,

    #[serde(rename_all = "camelCase")]
    AddProduct {
        name: String,
        price_cents: i64,
        category: String,
    },

    #[serde(rename_all = "camelCase")]
    UpdateProduct {
        id: ProductId,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        price_cents: Option<i64>,
        #[serde(default)]
        category: Option<String>,
    },

    RemoveProduct { id: ProductId },

    /// Adds with a caller-supplied snapshot; an in-range price is trusted as is.
    AddToCart { product: Product },

    /// Adds with a fresh snapshot read from the catalog.
    #[serde(rename_all = "camelCase")]
    AddToCartById { product_id: ProductId },

    #[serde(rename_all = "camelCase")]
    RemoveFromCart { product_id: ProductId },

    #[serde(rename_all = "camelCase")]
    SetCartQuantity { product_id: ProductId, quantity: i64 },

    ViewCart,
}

impl Command {
    /// The operation the gate must approve, or `None` for ungated commands.
    pub fn required_operation(&self) -> Option<Operation> {
        match self {
            Command::Login { .. } | Command::Logout | Command::CurrentSession => None,
            Command::ListProducts => Some(Operation::ReadCatalog),
            Command::AddProduct { .. } => Some(Operation::AddProduct),
            Command::UpdateProduct { .. } => Some(Operation::UpdateProduct),
            Command::RemoveProduct { .. } => Some(Operation::RemoveProduct),
            Command::AddToCart { .. } | Command::AddToCartById { .. } => Some(Operation::AddToCart),
            Command::RemoveFromCart { .. } => Some(Operation::RemoveFromCart),
            Command::SetCartQuantity { .. } => Some(Operation::SetCartQuantity),
            Command::ViewCart => Some(Operation::ReadCart),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::CurrentSession => "currentSession",
            Command::ListProducts => "listProducts",
            Command::AddProduct { .. } => "addProduct",
            Command::UpdateProduct { .. } => "updateProduct",
            Command::RemoveProduct { .. } => "removeProduct",
            Command::AddToCart { .. } => "addToCart",
            Command::AddToCartById { .. } => "addToCartById",
            Command::RemoveFromCart { .. } => "removeFromCart",
            Command::SetCartQuantity { .. } => "setCartQuantity",
            Command::ViewCart => "viewCart",
        }
    }
}

impl From<NewProduct> for Command {
    fn from(new: NewProduct) -> Self {
        Command::AddProduct {
            name: new.name,
            price_cents: new.price_cents,
            category: new.category,
        }
    }
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Outcome {
    Session(Session),

    Product(Product),

    #[serde(rename_all = "camelCase")]
    ProductRemoved { id: ProductId, removed: bool },

    Products(Vec<Product>),

    CartLine(CartLine),

    #[serde(rename_all = "camelCase")]
    CartLineRemoved { product_id: ProductId, removed: bool },

    Cart(CartSnapshot),
}
