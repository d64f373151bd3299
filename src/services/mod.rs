pub mod cart_calculation;
pub mod cart_service;
pub mod line_item_service;
pub mod product_service;
