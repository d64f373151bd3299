mod common;

use axum_cart_api::{
    error::AppError,
    repository::{CartRepository, LineItemRepository},
    services::{cart_calculation::cart_total_in_euro_cents, cart_service, line_item_service},
};
use uuid::Uuid;

use common::{catalog, store_with};

#[tokio::test]
async fn create_cart_persists_empty_cart() -> anyhow::Result<()> {
    let store = store_with(&[]).await;

    let cart = cart_service::create_cart(&store).await?;

    assert_eq!(cart.created_at, cart.updated_at);
    assert_eq!(store.find_cart(cart.id).await?, Some(cart.clone()));

    let loaded = cart_service::get_cart_with_line_items(&store, cart.id).await?;
    assert!(loaded.line_items.is_empty());
    assert_eq!(cart_total_in_euro_cents(&loaded), 0);
    Ok(())
}

#[tokio::test]
async fn each_cart_gets_a_fresh_id() -> anyhow::Result<()> {
    let store = store_with(&[]).await;
    let first = cart_service::create_cart(&store).await?;
    let second = cart_service::create_cart(&store).await?;
    assert_ne!(first.id, second.id);
    Ok(())
}

#[tokio::test]
async fn missing_cart_is_an_error_not_a_default() {
    let store = store_with(&[]).await;
    let missing = Uuid::new_v4();

    let err = cart_service::get_cart_by_id(&store, missing).await.unwrap_err();
    assert!(matches!(err, AppError::CartNotFound(id) if id == missing));

    let err = cart_service::get_cart_with_line_items(&store, missing)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CartNotFound(id) if id == missing));
}

#[tokio::test]
async fn loaded_cart_carries_its_line_items_and_total() -> anyhow::Result<()> {
    let products = catalog();
    let store = store_with(&products).await;
    let cart = cart_service::create_cart(&store).await?;
    line_item_service::create_by_cart_and_product(&store, &cart, products[0].clone(), 2).await?;
    line_item_service::create_by_cart_and_product(&store, &cart, products[1].clone(), 1).await?;

    let loaded = cart_service::get_cart_with_line_items(&store, cart.id).await?;

    assert_eq!(loaded.cart, cart);
    assert_eq!(loaded.line_items.len(), 2);
    assert_eq!(cart_total_in_euro_cents(&loaded), 2 * 68700 + 87000);
    Ok(())
}

#[tokio::test]
async fn delete_cart_leaves_no_orphan_line_items() -> anyhow::Result<()> {
    let products = catalog();
    let store = store_with(&products).await;
    let cart = cart_service::create_cart(&store).await?;
    let other = cart_service::create_cart(&store).await?;
    for product in &products {
        line_item_service::create_by_cart_and_product(&store, &cart, product.clone(), 1).await?;
    }
    let survivor =
        line_item_service::create_by_cart_and_product(&store, &other, products[0].clone(), 4)
            .await?;

    cart_service::delete_cart_by_id(&store, cart.id).await?;

    assert_eq!(store.find_cart(cart.id).await?, None);
    assert!(store.find_line_items_by_cart(cart.id).await?.is_empty());
    assert_eq!(store.all_line_items().await, vec![survivor]);
    assert!(store.find_cart(other.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn delete_missing_cart_fails() {
    let store = store_with(&[]).await;
    let missing = Uuid::new_v4();

    let err = cart_service::delete_cart_by_id(&store, missing)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CartNotFound(id) if id == missing));
}
