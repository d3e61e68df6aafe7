//! # Catalog Store
//!
//! Owns the product list. Insertion order is the display order.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  next id = 1 + max(ids currently present, default 0)                    │
//! │                                                                         │
//! │  [1, 2, 3, 4] ──add──► 5                                                │
//! │  [1, 2, 3, 4, 5] ──remove 5──► [1, 2, 3, 4] ──add──► 5  (again!)        │
//! │                                                                         │
//! │  Ids are unique at any instant but CAN be reused after the highest     │
//! │  one is removed. A cart line still pointing at the old 5 will then     │
//! │  share its product_id with an unrelated product.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The reuse is long-standing observable behavior and is kept as is.

use tracing::debug;

use crate::error::{StoreError, StoreResult, ValidationError};
use crate::types::{NewProduct, Product, ProductId, ProductPatch};
use crate::validation::{validate_category, validate_price_cents, validate_product_name};

/// Products loaded by [`CatalogStore::seeded`]: (name, price in cents, category).
const SEED_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Laptop", 99_900, "Electronics"),
    ("Phone", 59_900, "Electronics"),
    ("Book", 1_900, "Books"),
    ("Headphones", 14_900, "Electronics"),
];

/// Owner of the product list.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the demo products, ids 1 to 4.
    pub fn seeded() -> Self {
        let products = SEED_PRODUCTS
            .iter()
            .zip(1..)
            .map(|(&(name, price_cents, category), id)| Product {
                id,
                name: name.to_string(),
                price_cents,
                category: category.to_string(),
            })
            .collect();

        CatalogStore { products }
    }

    /// Adds a product and assigns it the next id.
    ///
    /// Name and category are stored trimmed.
    pub fn add_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        let name = validate_product_name(&new.name)?;
        let category = validate_category(&new.category)?;
        validate_price_cents(new.price_cents)?;

        let product = Product {
            id: self.next_id()?,
            name: name.to_string(),
            price_cents: new.price_cents,
            category: category.to_string(),
        };

        debug!(id = product.id, name = %product.name, "Product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Merges the supplied fields into an existing product.
    ///
    /// Every supplied field is validated before anything is written, so a
    /// bad patch changes nothing. Unknown ids return `NotFound`.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> StoreResult<Product> {
        let name = patch.name.as_deref().map(validate_product_name).transpose()?;
        let category = patch.category.as_deref().map(validate_category).transpose()?;
        if let Some(price_cents) = patch.price_cents {
            validate_price_cents(price_cents)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::product_not_found(id))?;

        if let Some(name) = name {
            product.name = name.to_string();
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(category) = category {
            product.category = category.to_string();
        }

        debug!(id, "Product updated");
        Ok(product.clone())
    }

    /// Removes a product if present. Removing an unknown id is a no-op.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(index);
        debug!(id, "Product removed");
        Some(removed)
    }

    /// Returns the products in insertion order.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Returns a snapshot of one product.
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&self) -> StoreResult<ProductId> {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            ValidationError::OutOfRange {
                field: "id".to_string(),
                min: 1,
                max: i64::from(ProductId::MAX),
            }
            .into()
        })
    }
}
