use uuid::Uuid;

use crate::{
    dto::line_items::LineItemUpdate,
    error::{AppError, AppResult},
    models::{Cart, LineItem, Product},
    repository::LineItemRepository,
};

pub async fn get_line_item_for_cart<R>(
    repo: &R,
    line_item_id: Uuid,
    cart_id: Uuid,
) -> AppResult<LineItem>
where
    R: LineItemRepository + ?Sized,
{
    repo.find_line_item_by_id_and_cart(line_item_id, cart_id)
        .await?
        .ok_or(AppError::LineItemNotFound(line_item_id))
}

pub async fn delete_line_item_by_id_and_cart<R>(
    repo: &R,
    line_item_id: Uuid,
    cart_id: Uuid,
) -> AppResult<()>
where
    R: LineItemRepository + ?Sized,
{
    let line_item = get_line_item_for_cart(repo, line_item_id, cart_id).await?;
    delete_line_item(repo, &line_item).await
}

pub async fn delete_line_item<R>(repo: &R, line_item: &LineItem) -> AppResult<()>
where
    R: LineItemRepository + ?Sized,
{
    repo.delete_line_item(line_item).await?;
    tracing::debug!(
        line_item_id = %line_item.id,
        cart_id = %line_item.cart_id,
        "line item deleted"
    );
    Ok(())
}

/// Puts `quantity` units of `product` into `cart`.
///
/// A cart holds at most one line item per product; growing an existing one
/// goes through [`update_line_item`].
pub async fn create_by_cart_and_product<R>(
    repo: &R,
    cart: &Cart,
    product: Product,
    quantity: i32,
) -> AppResult<LineItem>
where
    R: LineItemRepository + ?Sized,
{
    if quantity <= 0 {
        return Err(AppError::InvalidQuantity(quantity));
    }

    if repo.exists_by_cart_and_product(cart.id, product.id).await? {
        return Err(AppError::ProductAlreadyInCart {
            cart_id: cart.id,
            product_id: product.id,
        });
    }

    let line_item = LineItem::create_for_cart_and_product(cart, product, quantity);
    repo.save_line_item(&line_item).await?;
    tracing::info!(
        line_item_id = %line_item.id,
        cart_id = %cart.id,
        product_id = %line_item.product_id(),
        quantity,
        "line item created"
    );
    Ok(line_item)
}

/// Applies `update` to the line item.
///
/// A non-positive quantity removes the item instead of storing it. Without a
/// new quantity the item is saved back unchanged.
pub async fn update_line_item<R>(
    repo: &R,
    mut line_item: LineItem,
    update: LineItemUpdate,
) -> AppResult<()>
where
    R: LineItemRepository + ?Sized,
{
    match update.new_quantity {
        Some(quantity) if quantity <= 0 => return delete_line_item(repo, &line_item).await,
        Some(quantity) => line_item.set_quantity(quantity),
        None => {}
    }

    repo.save_line_item(&line_item).await?;
    tracing::debug!(
        line_item_id = %line_item.id,
        quantity = line_item.quantity,
        "line item updated"
    );
    Ok(())
}
