use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Cart, CartAggregate},
    repository::{CartRepository, LineItemRepository},
    services::line_item_service,
};

pub async fn create_cart<R>(repo: &R) -> AppResult<Cart>
where
    R: CartRepository + ?Sized,
{
    let cart = Cart::new();
    repo.save_cart(&cart).await?;
    tracing::info!(cart_id = %cart.id, "cart created");
    Ok(cart)
}

pub async fn get_cart_by_id<R>(repo: &R, id: Uuid) -> AppResult<Cart>
where
    R: CartRepository + ?Sized,
{
    repo.find_cart(id).await?.ok_or(AppError::CartNotFound(id))
}

/// Loads a cart and its line items in one aggregate.
pub async fn get_cart_with_line_items<R>(repo: &R, id: Uuid) -> AppResult<CartAggregate>
where
    R: CartRepository + LineItemRepository + ?Sized,
{
    let cart = get_cart_by_id(repo, id).await?;
    let line_items = repo.find_line_items_by_cart(cart.id).await?;
    Ok(CartAggregate::new(cart, line_items))
}

pub async fn delete_cart_by_id<R>(repo: &R, id: Uuid) -> AppResult<()>
where
    R: CartRepository + LineItemRepository + ?Sized,
{
    let cart = get_cart_by_id(repo, id).await?;
    delete_cart(repo, &cart).await
}

/// Removes every line item of the cart, then the cart itself.
pub async fn delete_cart<R>(repo: &R, cart: &Cart) -> AppResult<()>
where
    R: CartRepository + LineItemRepository + ?Sized,
{
    let line_items = repo.find_line_items_by_cart(cart.id).await?;
    let removed = line_items.len();
    for line_item in &line_items {
        line_item_service::delete_line_item(repo, line_item).await?;
    }

    repo.delete_cart(cart).await?;
    tracing::info!(cart_id = %cart.id, line_items = removed, "cart deleted");
    Ok(())
}
