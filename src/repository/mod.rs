//! Persistence seams for the cart and catalog.
//!
//! Services only talk to these traits. [`OrmStore`] backs them with Postgres
//! through SeaORM; [`InMemoryStore`] keeps everything in process for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Cart, LineItem, Product},
};

mod memory;
mod orm;

pub use memory::InMemoryStore;
pub use orm::OrmStore;

/// Read access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_product(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Products ordered by SKU.
    async fn list_products(&self, limit: u64, offset: u64) -> AppResult<Vec<Product>>;

    async fn count_products(&self) -> AppResult<u64>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_cart(&self, id: Uuid) -> AppResult<Option<Cart>>;

    /// Inserts the cart or overwrites the stored one with the same id.
    async fn save_cart(&self, cart: &Cart) -> AppResult<()>;

    async fn delete_cart(&self, cart: &Cart) -> AppResult<()>;
}

#[async_trait]
pub trait LineItemRepository: Send + Sync {
    async fn find_line_item_by_id_and_cart(
        &self,
        line_item_id: Uuid,
        cart_id: Uuid,
    ) -> AppResult<Option<LineItem>>;

    /// Line items of a cart, oldest first.
    async fn find_line_items_by_cart(&self, cart_id: Uuid) -> AppResult<Vec<LineItem>>;

    async fn exists_by_cart_and_product(&self, cart_id: Uuid, product_id: Uuid)
    -> AppResult<bool>;

    /// Inserts the line item or overwrites the stored one with the same id.
    async fn save_line_item(&self, line_item: &LineItem) -> AppResult<()>;

    async fn delete_line_item(&self, line_item: &LineItem) -> AppResult<()>;
}

/// Everything the HTTP layer needs from storage.
pub trait Store: ProductRepository + CartRepository + LineItemRepository {}

impl<T> Store for T where T: ProductRepository + CartRepository + LineItemRepository {}
