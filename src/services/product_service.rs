use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    repository::ProductRepository,
};

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;

pub async fn get_product<R>(repo: &R, id: Uuid) -> AppResult<Product>
where
    R: ProductRepository + ?Sized,
{
    repo.find_product(id)
        .await?
        .ok_or(AppError::ProductNotFound(id))
}

/// Page size actually served for a requested one: at least 1, at most
/// [`MAX_PAGE_SIZE`].
pub fn effective_page_size(page_size: i64) -> i64 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// One page of the catalog. Pages start at 1; anything lower is treated as 1.
pub async fn list_products<R>(repo: &R, page: i64, page_size: i64) -> AppResult<Vec<Product>>
where
    R: ProductRepository + ?Sized,
{
    let page_size = effective_page_size(page_size);
    let offset = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let offset = u64::try_from(offset)
        .map_err(|_| AppError::BadRequest(format!("invalid page {page}")))?;
    repo.list_products(page_size as u64, offset).await
}

pub async fn count_products<R>(repo: &R) -> AppResult<i64>
where
    R: ProductRepository + ?Sized,
{
    let total = repo.count_products().await?;
    Ok(i64::try_from(total).unwrap_or(i64::MAX))
}
