//! # Cart Store
//!
//! Owns the shopping cart lines.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Operation              Line Change             │
//! │  ─────────               ─────────              ───────────             │
//! │                                                                         │
//! │  "Add to Cart" ────────► add_to_cart() ───────► qty += 1 or push(qty 1) │
//! │                                                                         │
//! │  Change quantity ──────► set_quantity() ──────► line.qty = n            │
//! │                                                                         │
//! │  "Remove" ─────────────► remove_from_cart() ──► whole line dropped      │
//! │                                                                         │
//! │  Logout ───(Coordinator)► clear_cart() ───────► lines.clear()           │
//! │                                                                         │
//! │  Cart header/footer ───► summary()/total() ───► (read only, derived)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `product_id`
//! - `1 <= quantity <= MAX_ITEM_QUANTITY`
//! - Totals are never stored; they are summed from the lines on each read
//! - The summed total always fits in `i64` cents

use tracing::debug;

use crate::error::{StoreError, StoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartLine, CartSnapshot, CartSummary, Product, ProductId};
use crate::validation::{validate_price_cents, validate_product_name, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

/// Owner of the cart lines.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1, snapshot left as it was
    /// - Not in cart: the snapshot is validated (name, price range), then a
    ///   new line with quantity 1 and the trimmed name and price frozen in
    /// - Nothing changes when the new quantity or cart total is out of range
    pub fn add_to_cart(&mut self, product: &Product) -> StoreResult<CartLine> {
        if let Some(index) = self.position(product.id) {
            let mut line = self.lines[index].clone();
            if line.quantity >= MAX_ITEM_QUANTITY {
                return Err(ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: MAX_ITEM_QUANTITY,
                }
                .into());
            }
            line.quantity += 1;
            self.ensure_total_fits(&line)?;

            debug!(product_id = product.id, quantity = line.quantity, "Cart line incremented");
            self.lines[index] = line.clone();
            return Ok(line);
        }

        let name = validate_product_name(&product.name)?;
        validate_price_cents(product.price_cents)?;

        let line = CartLine {
            name: name.to_string(),
            ..CartLine::from_product(product)
        };
        self.ensure_total_fits(&line)?;

        debug!(product_id = product.id, "Cart line added");
        self.lines.push(line.clone());
        Ok(line)
    }

    /// Drops the whole line for a product. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.position(product_id)?;
        debug!(product_id, "Cart line removed");
        Some(self.lines.remove(index))
    }

    /// Sets a line's quantity explicitly.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> StoreResult<CartLine> {
        validate_quantity(quantity)?;

        let index = self
            .position(product_id)
            .ok_or_else(|| StoreError::cart_line_not_found(product_id))?;

        let line = CartLine {
            quantity,
            ..self.lines[index].clone()
        };
        self.ensure_total_fits(&line)?;

        debug!(product_id, quantity, "Cart line quantity set");
        self.lines[index] = line.clone();
        Ok(line)
    }

    /// Empties the cart. Only the coordinator calls this, as part of logout.
    pub(crate) fn clear_cart(&mut self) {
        if !self.lines.is_empty() {
            debug!(lines = self.lines.len(), "Cart cleared");
        }
        self.lines.clear();
    }

    /// `Σ unit_price × quantity` over the current lines.
    pub fn cart_total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Returns line count, total quantity and total.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_lines(&self.lines)
    }

    /// Returns lines and summary together.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self.lines.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    /// Checks the cart total still fits in `i64` cents with `candidate`
    /// replacing (or joining) the line for its product.
    fn ensure_total_fits(&self, candidate: &CartLine) -> StoreResult<()> {
        self.lines
            .iter()
            .filter(|l| l.product_id != candidate.product_id)
            .chain(std::iter::once(candidate))
            .try_fold(Money::zero(), |total, line| {
                line.unit_price()
                    .checked_multiply_quantity(line.quantity)
                    .and_then(|line_total| total.checked_add(line_total))
            })
            .map(|_| ())
            .ok_or_else(|| {
                ValidationError::OutOfRange {
                    field: "cartTotal".to_string(),
                    min: 0,
                    max: i64::MAX,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price_cents,
            category: "Test".to_string(),
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = CartStore::new();
        let line = cart.add_to_cart(&test_product(5, 2500)).unwrap();

        assert_eq!(line.product_id, 5);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price_cents, 2500);
        assert_eq!(cart.lines(), vec![line]);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = CartStore::new();
        let product = test_product(5, 2500);

        cart.add_to_cart(&product).unwrap();
        let line = cart.add_to_cart(&product).unwrap();

        assert_eq!(line.quantity, 2);
        assert_eq!(cart.lines().len(), 1); // Still one line
        assert_eq!(cart.cart_total().cents(), 5000);
    }

    #[test]
    fn test_increment_keeps_original_snapshot() {
        let mut cart = CartStore::new();
        let mut product = test_product(1, 1000);
        cart.add_to_cart(&product).unwrap();

        // Same id, new price and name: the line keeps what it froze first
        product.price_cents = 9999;
        product.name = "Renamed".to_string();
        let line = cart.add_to_cart(&product).unwrap();

        assert_eq!(line.unit_price_cents, 1000);
        assert_eq!(line.name, "Product 1");
        assert_eq!(cart.cart_total().cents(), 2000);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut cart = CartStore::new();
        let a = test_product(1, 99_900);
        let b = test_product(3, 1_900);

        cart.add_to_cart(&a).unwrap();
        cart.add_to_cart(&b).unwrap();
        cart.add_to_cart(&b).unwrap();
        cart.set_quantity(1, 3).unwrap();

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price_cents * l.quantity)
            .sum();
        assert_eq!(cart.cart_total().cents(), expected);
        assert_eq!(expected, 3 * 99_900 + 2 * 1_900);

        let summary = cart.summary();
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.total_quantity, 5);
        assert_eq!(summary.total_cents, expected);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = CartStore::new();
        let product = test_product(2, 500);
        cart.add_to_cart(&product).unwrap();
        cart.add_to_cart(&product).unwrap();

        let removed = cart.remove_from_cart(2).unwrap();
        assert_eq!(removed.quantity, 2);
        assert!(cart.is_empty());
        assert!(cart.cart_total().is_zero());

        // Unknown id: no-op
        assert_eq!(cart.remove_from_cart(2), None);
    }

    #[test]
    fn test_set_quantity_validation() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();

        assert!(matches!(
            cart.set_quantity(1, 0),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(cart.set_quantity(1, -2).is_err());
        assert!(cart.set_quantity(1, MAX_ITEM_QUANTITY + 1).is_err());
        assert_eq!(
            cart.set_quantity(7, 2),
            Err(StoreError::cart_line_not_found(7))
        );

        // Failed calls left the line alone
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_stops_at_max_quantity() {
        let mut cart = CartStore::new();
        let product = test_product(1, 100);
        cart.add_to_cart(&product).unwrap();
        cart.set_quantity(1, MAX_ITEM_QUANTITY).unwrap();

        assert!(cart.add_to_cart(&product).is_err());
        assert_eq!(cart.lines()[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&test_product(1, 100)).unwrap();
        cart.add_to_cart(&test_product(2, 200)).unwrap();

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.snapshot().summary, CartSummary::default());
    }

    #[test]
    fn test_snapshot_must_be_a_valid_product() {
        let mut cart = CartStore::new();

        let negative = test_product(77, -100_000);
        assert!(matches!(
            cart.add_to_cart(&negative),
            Err(StoreError::InvalidInput(ValidationError::OutOfRange { .. }))
        ));

        let nameless = Product {
            name: "  ".to_string(),
            ..test_product(78, 100)
        };
        assert!(matches!(
            cart.add_to_cart(&nameless),
            Err(StoreError::InvalidInput(ValidationError::Required { .. }))
        ));

        let overpriced = test_product(79, MAX_PRICE_CENTS + 1);
        assert!(cart.add_to_cart(&overpriced).is_err());

        assert!(cart.is_empty());
        assert!(cart.cart_total().is_zero());
    }

    #[test]
    fn test_snapshot_name_is_trimmed() {
        let mut cart = CartStore::new();
        let product = Product {
            name: "  Mouse ".to_string(),
            ..test_product(5, 2500)
        };
        assert_eq!(cart.add_to_cart(&product).unwrap().name, "Mouse");
    }

    #[test]
    fn test_max_price_lines_total_exactly() {
        let mut cart = CartStore::new();
        let product = test_product(1, MAX_PRICE_CENTS);
        cart.add_to_cart(&product).unwrap();
        cart.add_to_cart(&product).unwrap();
        cart.set_quantity(1, MAX_ITEM_QUANTITY).unwrap();

        assert_eq!(cart.cart_total().cents(), MAX_PRICE_CENTS * MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_total_overflow_is_rejected_without_change() {
        let mut cart = CartStore::new();
        // Stands in for the millions of capped lines it would take to get here
        cart.lines.push(CartLine {
            product_id: 1,
            name: "Bulk".to_string(),
            unit_price_cents: i64::MAX / 2 + 1,
            quantity: 1,
        });
        let before = cart.lines();

        assert!(matches!(
            cart.add_to_cart(&test_product(1, 0)),
            Err(StoreError::InvalidInput(ValidationError::OutOfRange { .. }))
        ));
        assert!(cart.set_quantity(1, 2).is_err());
        assert!(cart.add_to_cart(&test_product(2, MAX_PRICE_CENTS)).is_ok());

        assert_eq!(cart.lines()[0], before[0]);
        assert_eq!(cart.lines().len(), 2);
        // Reads never panic
        assert!(cart.summary().total_cents > 0);
    }
}
