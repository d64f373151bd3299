pub mod carts;
pub mod line_items;
pub mod products;
