use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// One page of the catalog as served by `GET /api/products`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductPage {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub products: Vec<Product>,
}
