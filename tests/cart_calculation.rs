mod common;

use axum_cart_api::{
    models::{Cart, CartAggregate, LineItem},
    services::cart_calculation::cart_total_in_euro_cents,
};

use common::product;

fn cart_with(items: &[(i32, i64)]) -> CartAggregate {
    let cart = Cart::new();
    let line_items = items
        .iter()
        .enumerate()
        .map(|(i, &(quantity, price))| {
            LineItem::create_for_cart_and_product(&cart, product(i as i32 + 1, price), quantity)
        })
        .collect();
    CartAggregate::new(cart, line_items)
}

#[test]
fn empty_cart_totals_zero() {
    assert_eq!(cart_total_in_euro_cents(&CartAggregate::empty(Cart::new())), 0);
}

#[test]
fn total_multiplies_quantity_by_unit_price() {
    let cart = cart_with(&[(4, 100), (2, 50)]);
    assert_eq!(cart_total_in_euro_cents(&cart), 500);
}

#[test]
fn single_line_item_total() {
    let cart = cart_with(&[(3, 68700)]);
    assert_eq!(cart_total_in_euro_cents(&cart), 206_100);
}

#[test]
fn total_does_not_overflow_32_bits() {
    let cart = cart_with(&[(i32::MAX, 100), (1, 1)]);
    assert_eq!(cart_total_in_euro_cents(&cart), i64::from(i32::MAX) * 100 + 1);
}

#[test]
fn total_is_deterministic() {
    let cart = cart_with(&[(1, 99900), (2, 87000), (5, 1)]);
    let first = cart_total_in_euro_cents(&cart);
    assert_eq!(first, 99900 + 174_000 + 5);
    assert_eq!(cart_total_in_euro_cents(&cart), first);
}

#[test]
fn aggregate_total_matches_calculator() {
    let cart = cart_with(&[(4, 100), (2, 50)]);
    assert_eq!(cart.total_in_euro_cents(), 500);
    assert_eq!(cart.total_in_euro_cents(), cart_total_in_euro_cents(&cart));
}
