use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CartRepository, LineItemRepository, ProductRepository};
use crate::{
    error::AppResult,
    models::{Cart, LineItem, Product},
};

/// In-memory store used by tests and local experiments.
///
/// It behaves like the Postgres store except that deleting a cart does not
/// cascade to its line items, so callers have to clean them up themselves.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
    line_items: Arc<RwLock<Vec<LineItem>>>,
    line_item_saves: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose catalog holds the given products.
    pub async fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::new();
        for product in products {
            store.insert_product(product).await;
        }
        store
    }

    pub async fn insert_product(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    /// Number of times `save_line_item` has been called.
    pub fn line_item_saves(&self) -> usize {
        self.line_item_saves.load(Ordering::SeqCst)
    }

    /// Every stored line item, whichever cart it belongs to.
    pub async fn all_line_items(&self) -> Vec<LineItem> {
        self.line_items.read().await.clone()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_product(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list_products(&self, limit: u64, offset: u64) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by_key(|p| p.sku);
        Ok(products
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count_products(&self) -> AppResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}

#[async_trait]
impl CartRepository for InMemoryStore {
    async fn find_cart(&self, id: Uuid) -> AppResult<Option<Cart>> {
        Ok(self.carts.read().await.get(&id).cloned())
    }

    async fn save_cart(&self, cart: &Cart) -> AppResult<()> {
        self.carts.write().await.insert(cart.id, cart.clone());
        Ok(())
    }

    async fn delete_cart(&self, cart: &Cart) -> AppResult<()> {
        self.carts.write().await.remove(&cart.id);
        Ok(())
    }
}

#[async_trait]
impl LineItemRepository for InMemoryStore {
    async fn find_line_item_by_id_and_cart(
        &self,
        line_item_id: Uuid,
        cart_id: Uuid,
    ) -> AppResult<Option<LineItem>> {
        let items = self.line_items.read().await;
        Ok(items
            .iter()
            .find(|item| item.id == line_item_id && item.cart_id == cart_id)
            .cloned())
    }

    async fn find_line_items_by_cart(&self, cart_id: Uuid) -> AppResult<Vec<LineItem>> {
        let mut items: Vec<LineItem> = self
            .line_items
            .read()
            .await
            .iter()
            .filter(|item| item.cart_id == cart_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn exists_by_cart_and_product(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<bool> {
        let items = self.line_items.read().await;
        Ok(items
            .iter()
            .any(|item| item.cart_id == cart_id && item.product_id() == product_id))
    }

    async fn save_line_item(&self, line_item: &LineItem) -> AppResult<()> {
        self.line_item_saves.fetch_add(1, Ordering::SeqCst);
        let mut items = self.line_items.write().await;
        match items.iter_mut().find(|item| item.id == line_item.id) {
            Some(existing) => *existing = line_item.clone(),
            None => items.push(line_item.clone()),
        }
        Ok(())
    }

    async fn delete_line_item(&self, line_item: &LineItem) -> AppResult<()> {
        self.line_items
            .write()
            .await
            .retain(|item| item.id != line_item.id);
        Ok(())
    }
}
