//! # Authorization Gate
//!
//! Pure role check consulted on every gated command.
//!
//! ## Permission Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation          │ logged out │  user  │  admin                      │
//! │  ───────────────────┼────────────┼────────┼────────                     │
//! │  readCatalog        │     ✗      │   ✓    │   ✓                         │
//! │  readCart           │     ✗      │   ✓    │   ✓                         │
//! │  addToCart          │     ✗      │   ✓    │   ✓                         │
//! │  removeFromCart     │     ✗      │   ✓    │   ✓                         │
//! │  setCartQuantity    │     ✗      │   ✓    │   ✓                         │
//! │  addProduct         │     ✗      │   ✗    │   ✓                         │
//! │  updateProduct      │     ✗      │   ✗    │   ✓                         │
//! │  removeProduct      │     ✗      │   ✗    │   ✓                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decisions are made from the session passed in and never cached, so a
//! logout or re-login with another role applies to the very next command.
//!
//! - No I/O
//! - No panics
//! - The role is whatever the client asserted at login

use serde::Serialize;
use std::fmt;

use crate::error::{StoreError, StoreResult};
use crate::types::{Role, Session};

/// Something a command needs permission to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    ReadCatalog,
    ReadCart,
    AddToCart,
    RemoveFromCart,
    SetCartQuantity,
    AddProduct,
    UpdateProduct,
    RemoveProduct,
}

impl Operation {
    /// Wire name of the operation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::ReadCatalog => "readCatalog",
            Operation::ReadCart => "readCart",
            Operation::AddToCart => "addToCart",
            Operation::RemoveFromCart => "removeFromCart",
            Operation::SetCartQuantity => "setCartQuantity",
            Operation::AddProduct => "addProduct",
            Operation::UpdateProduct => "updateProduct",
            Operation::RemoveProduct => "removeProduct",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const USER_OPERATIONS: &[Operation] = &[
    Operation::ReadCatalog,
    Operation::ReadCart,
    Operation::AddToCart,
    Operation::RemoveFromCart,
    Operation::SetCartQuantity,
];

const ADMIN_OPERATIONS: &[Operation] = &[
    Operation::ReadCatalog,
    Operation::ReadCart,
    Operation::AddToCart,
    Operation::RemoveFromCart,
    Operation::SetCartQuantity,
    Operation::AddProduct,
    Operation::UpdateProduct,
    Operation::RemoveProduct,
];

fn role_operations(role: Role) -> &'static [Operation] {
    match role {
        Role::User => USER_OPERATIONS,
        Role::Admin => ADMIN_OPERATIONS,
    }
}

/// Why the gate said no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DenialReason {
    /// Nobody is logged in.
    NotAuthenticated,
    /// Logged in, but the role lacks the operation.
    InsufficientRole { role: Role },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NotAuthenticated => f.write_str("not logged in"),
            DenialReason::InsufficientRole { role } => {
                write!(f, "role '{}' may not perform this operation", role)
            }
        }
    }
}

/// Returns true if the session may perform the operation.
pub fn can_perform(session: &Session, operation: Operation) -> bool {
    authorize(session, operation).is_ok()
}

/// Like [`can_perform`], but says why on denial.
pub fn authorize(session: &Session, operation: Operation) -> StoreResult<()> {
    let role = session.active_role().ok_or(StoreError::Denied {
        operation,
        reason: DenialReason::NotAuthenticated,
    })?;

    if role_operations(role).contains(&operation) {
        Ok(())
    } else {
        Err(StoreError::Denied {
            operation,
            reason: DenialReason::InsufficientRole { role },
        })
    }
}

/// Everything the session may currently do; empty when logged out.
///
/// The UI uses this to decide which panels to render (the product admin
/// panel only appears when `addProduct` is in the list).
pub fn permitted_operations(session: &Session) -> Vec<Operation> {
    session
        .active_role()
        .map(|role| role_operations(role).to_vec())
        .unwrap_or_default()
}
