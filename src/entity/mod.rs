pub mod carts;
pub mod line_items;
pub mod products;

pub use carts::Entity as Carts;
pub use line_items::Entity as LineItems;
pub use products::Entity as Products;
