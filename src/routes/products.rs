use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};

use crate::{
    dto::products::ProductPage,
    error::AppResult,
    models::Product,
    response::ErrorBody,
    routes::params::{self, Pagination, parse_uuid},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(Pagination),
    responses(
        (status = 200, description = "List products", body = ProductPage),
        (status = 400, description = "Invalid query", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> AppResult<Json<ProductPage>> {
    let (page, limit) = params::pagination(query)?.normalize();
    let store = state.store.as_ref();

    let total = product_service::count_products(store).await?;
    let products = product_service::list_products(store, page, limit).await?;

    Ok(Json(ProductPage {
        page,
        per_page: limit,
        total,
        products,
    }))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Invalid UUID", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_uuid(&id)?;
    let product = product_service::get_product(state.store.as_ref(), id).await?;
    Ok(Json(product))
}
