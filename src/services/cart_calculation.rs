use crate::models::{CartAggregate, LineItem};

/// Sum of quantity times unit price over every line item of the cart, in euro
/// cents. An empty cart totals zero.
pub fn cart_total_in_euro_cents(cart: &CartAggregate) -> i64 {
    line_items_total_in_euro_cents(&cart.line_items)
}

pub fn line_items_total_in_euro_cents(line_items: &[LineItem]) -> i64 {
    line_items
        .iter()
        .map(|item| i64::from(item.quantity) * item.product.price_in_euro_cents)
        .sum()
}
