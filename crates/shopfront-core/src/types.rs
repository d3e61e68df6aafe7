//! # Domain Types
//!
//! Data model shared by the stores, the coordinator and the UI layer.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Session      │   │    Product      │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  logged_in      │   │  id (store)     │   │  product_id     │       │
//! │  │  user_name      │   │  name           │   │  name (frozen)  │       │
//! │  │  role?          │   │  price_cents    │   │  unit_price     │       │
//! │  │  token?         │   │  category       │   │   (frozen)      │       │
//! │  └─────────────────┘   └─────────────────┘   │  quantity ≥ 1   │       │
//! │   owned by              owned by              └─────────────────┘       │
//! │   SessionStore          CatalogStore           owned by CartStore       │
//! │                                                                         │
//! │  Derived, never stored: CartSummary { line_count, total_quantity,      │
//! │                                       total_cents }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Catalog-assigned product identifier.
pub type ProductId = u32;

// =============================================================================
// Role
// =============================================================================

/// Role asserted by the client at login.
///
/// ## Trust Boundary
/// Nothing verifies this against a server. Whoever picks "admin" on the
/// login form gets admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Shopper: browse the catalog, manage own cart.
    User,
    /// Everything a user can do, plus catalog management.
    Admin,
}

impl Role {
    /// Returns the wire name of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec!["user".to_string(), "admin".to_string()],
            }),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// The authentication record.
///
/// Replaced wholesale on login and logout; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub user_name: String,
    pub role: Option<Role>,
    /// Opaque token; unique for the process lifetime, validated nowhere.
    pub token: Option<String>,
}

impl Session {
    /// The logged-out record every process starts with.
    pub fn logged_out() -> Self {
        Session {
            logged_in: false,
            user_name: String::new(),
            role: None,
            token: None,
        }
    }

    /// Returns the role only while logged in.
    pub fn active_role(&self) -> Option<Role> {
        if self.logged_in {
            self.role
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::logged_out()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the catalog: `1 + max(existing ids)`.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit), never negative.
    pub price_cents: i64,

    /// Free-form category label ("Electronics", "Books", ...).
    pub category: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Payload for adding a product; the catalog assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub category: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price_cents: i64, category: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            price_cents,
            category: category.into(),
        }
    }
}

/// Partial update for a product. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price_cents.is_none() && self.category.is_none()
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// ## Snapshot Pattern
/// `name` and `unit_price_cents` are copied from the product when the line
/// is created and never refreshed. A later price edit in the catalog leaves
/// this line (and the cart total) alone. `product_id` may also outlive the
/// product it names; removing a product does not touch the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Always at least 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a single-quantity line from a product snapshot.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// Cart aggregates, recomputed on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct lines ("3 items" in the cart header).
    pub line_count: u32,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl CartSummary {
    /// Computes the summary from a set of lines.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let total: Money = lines.iter().map(CartLine::line_total).sum();
        CartSummary {
            line_count: u32::try_from(lines.len()).unwrap_or(u32::MAX),
            total_quantity: lines
                .iter()
                .fold(0_i64, |acc, l| acc.saturating_add(l.quantity)),
            total_cents: total.cents(),
        }
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// A cart read: lines in insertion order plus their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
}

impl From<&[CartLine]> for CartSnapshot {
    fn from(lines: &[CartLine]) -> Self {
        CartSnapshot {
            lines: lines.to_vec(),
            summary: CartSummary::from_lines(lines),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
