use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::cart_calculation::cart_total_in_euro_cents;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub sku: i32,
    pub title: String,
    pub description: String,
    pub price_in_euro_cents: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// A fresh, empty cart stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A quantity of one product inside one cart. The referenced product is
/// carried resolved so totals never need a second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product: Product,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LineItem {
    pub fn create_for_cart_and_product(cart: &Cart, product: Product, quantity: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cart_id: cart.id,
            product,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }

    pub fn product_id(&self) -> Uuid {
        self.product.id
    }
}

/// A cart together with its line items, ordered by creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAggregate {
    pub cart: Cart,
    pub line_items: Vec<LineItem>,
}

impl CartAggregate {
    pub fn new(cart: Cart, line_items: Vec<LineItem>) -> Self {
        Self { cart, line_items }
    }

    pub fn empty(cart: Cart) -> Self {
        Self::new(cart, Vec::new())
    }

    pub fn total_in_euro_cents(&self) -> i64 {
        cart_total_in_euro_cents(self)
    }
}
