use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr, sea_query::OnConflict,
};
use uuid::Uuid;

use super::{CartRepository, LineItemRepository, ProductRepository};
use crate::{
    entity::{
        carts::{self, Entity as Carts},
        line_items::{self, Entity as LineItems},
        products::{self, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Cart, LineItem, Product},
};

/// Postgres-backed store built on a SeaORM connection.
#[derive(Clone)]
pub struct OrmStore {
    conn: DatabaseConnection,
}

impl OrmStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

fn resolve_line_item(
    (model, product): (line_items::Model, Option<products::Model>),
) -> AppResult<LineItem> {
    let product = product.ok_or_else(|| {
        anyhow::anyhow!(
            "line item {} references missing product {}",
            model.id,
            model.product_id
        )
    })?;
    Ok(model.into_line_item(product.into()))
}

#[async_trait]
impl ProductRepository for OrmStore {
    async fn find_product(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Product::from);
        Ok(product)
    }

    async fn list_products(&self, limit: u64, offset: u64) -> AppResult<Vec<Product>> {
        let products = Products::find()
            .order_by_asc(products::Column::Sku)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(products)
    }

    async fn count_products(&self) -> AppResult<u64> {
        Ok(Products::find().count(&self.conn).await?)
    }
}

#[async_trait]
impl CartRepository for OrmStore {
    async fn find_cart(&self, id: Uuid) -> AppResult<Option<Cart>> {
        let cart = Carts::find_by_id(id).one(&self.conn).await?.map(Cart::from);
        Ok(cart)
    }

    async fn save_cart(&self, cart: &Cart) -> AppResult<()> {
        let active = carts::ActiveModel {
            id: Set(cart.id),
            created_at: Set(cart.created_at.fixed_offset()),
            updated_at: Set(cart.updated_at.fixed_offset()),
        };
        Carts::insert(active)
            .on_conflict(
                OnConflict::column(carts::Column::Id)
                    .update_column(carts::Column::UpdatedAt)
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    async fn delete_cart(&self, cart: &Cart) -> AppResult<()> {
        Carts::delete_by_id(cart.id).exec(&self.conn).await?;
        Ok(())
    }
}

#[async_trait]
impl LineItemRepository for OrmStore {
    async fn find_line_item_by_id_and_cart(
        &self,
        line_item_id: Uuid,
        cart_id: Uuid,
    ) -> AppResult<Option<LineItem>> {
        LineItems::find()
            .filter(line_items::Column::Id.eq(line_item_id))
            .filter(line_items::Column::CartId.eq(cart_id))
            .find_also_related(Products)
            .one(&self.conn)
            .await?
            .map(resolve_line_item)
            .transpose()
    }

    async fn find_line_items_by_cart(&self, cart_id: Uuid) -> AppResult<Vec<LineItem>> {
        LineItems::find()
            .filter(line_items::Column::CartId.eq(cart_id))
            .order_by_asc(line_items::Column::CreatedAt)
            .order_by_asc(line_items::Column::Id)
            .find_also_related(Products)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(resolve_line_item)
            .collect()
    }

    async fn exists_by_cart_and_product(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<bool> {
        let count = LineItems::find()
            .filter(line_items::Column::CartId.eq(cart_id))
            .filter(line_items::Column::ProductId.eq(product_id))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    async fn save_line_item(&self, line_item: &LineItem) -> AppResult<()> {
        let active = line_items::ActiveModel {
            id: Set(line_item.id),
            cart_id: Set(line_item.cart_id),
            product_id: Set(line_item.product_id()),
            quantity: Set(line_item.quantity),
            created_at: Set(line_item.created_at.fixed_offset()),
            updated_at: Set(line_item.updated_at.fixed_offset()),
        };
        LineItems::insert(active)
            .on_conflict(
                OnConflict::column(line_items::Column::Id)
                    .update_columns([line_items::Column::Quantity, line_items::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await
            .map_err(|err| conflict_or_db_error(err, line_item))?;
        Ok(())
    }

    async fn delete_line_item(&self, line_item: &LineItem) -> AppResult<()> {
        LineItems::delete_by_id(line_item.id)
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}

// The (cart_id, product_id) unique key is the only one a line item insert can
// trip besides the primary key, which the upsert absorbs.
fn conflict_or_db_error(err: DbErr, line_item: &LineItem) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::ProductAlreadyInCart {
            cart_id: line_item.cart_id,
            product_id: line_item.product_id(),
        },
        _ => AppError::OrmError(err),
    }
}
