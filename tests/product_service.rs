mod common;

use axum_cart_api::{error::AppError, services::product_service};
use uuid::Uuid;

use common::{catalog, product, store_with};

#[tokio::test]
async fn get_product_by_id() -> anyhow::Result<()> {
    let products = catalog();
    let store = store_with(&products).await;

    let found = product_service::get_product(&store, products[1].id).await?;
    assert_eq!(found, products[1]);

    let missing = Uuid::new_v4();
    let err = product_service::get_product(&store, missing)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ProductNotFound(id) if id == missing));
    Ok(())
}

#[tokio::test]
async fn pages_are_one_indexed_and_ordered_by_sku() -> anyhow::Result<()> {
    let products: Vec<_> = [5, 3, 1, 4, 2].into_iter().map(|sku| product(sku, 100)).collect();
    let store = store_with(&products).await;

    let first = product_service::list_products(&store, 1, 2).await?;
    let second = product_service::list_products(&store, 2, 2).await?;
    let third = product_service::list_products(&store, 3, 2).await?;
    let beyond = product_service::list_products(&store, 4, 2).await?;

    let skus = |page: &[axum_cart_api::models::Product]| page.iter().map(|p| p.sku).collect::<Vec<_>>();
    assert_eq!(skus(&first), vec![1, 2]);
    assert_eq!(skus(&second), vec![3, 4]);
    assert_eq!(skus(&third), vec![5]);
    assert!(beyond.is_empty());

    assert_eq!(product_service::count_products(&store).await?, 5);
    Ok(())
}

#[tokio::test]
async fn page_size_is_capped_and_at_least_one() -> anyhow::Result<()> {
    let products: Vec<_> = (1..=150).map(|sku| product(sku, 100)).collect();
    let store = store_with(&products).await;

    let capped = product_service::list_products(&store, 1, 1000).await?;
    assert_eq!(capped.len(), product_service::MAX_PAGE_SIZE as usize);

    let second = product_service::list_products(&store, 2, 1000).await?;
    assert_eq!(second.len(), 50);
    assert_eq!(second[0].sku, 101);

    let single = product_service::list_products(&store, 1, 0).await?;
    assert_eq!(single.len(), 1);
    Ok(())
}

#[tokio::test]
async fn far_away_page_is_empty() -> anyhow::Result<()> {
    let store = store_with(&catalog()).await;

    let page = product_service::list_products(&store, i64::MAX, product_service::MAX_PAGE_SIZE)
        .await?;
    assert!(page.is_empty());
    Ok(())
}
