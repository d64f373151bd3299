use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::carts::{CartSerializerConfig, CartView},
    error::AppResult,
    response::{Created, ErrorBody},
    routes::{line_items, params::parse_uuid},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{cart_id}", get(get_cart).delete(delete_cart))
        .merge(line_items::router())
}

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 201, description = "Cart created", body = Created),
    ),
    tag = "Carts"
)]
pub async fn create_cart(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Created>)> {
    let cart = cart_service::create_cart(state.store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(Created { id: cart.id })))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart with its line items and total", body = CartView),
        (status = 400, description = "Invalid UUID", body = ErrorBody),
        (status = 404, description = "Cart not found", body = ErrorBody),
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> AppResult<Json<CartView>> {
    let cart_id = parse_uuid(&cart_id)?;
    let cart = cart_service::get_cart_with_line_items(state.store.as_ref(), cart_id).await?;
    Ok(Json(CartView::new(&cart, CartSerializerConfig::new(true))))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID")
    ),
    responses(
        (status = 204, description = "Cart and its line items deleted"),
        (status = 400, description = "Invalid UUID", body = ErrorBody),
        (status = 404, description = "Cart not found", body = ErrorBody),
    ),
    tag = "Carts"
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> AppResult<StatusCode> {
    let cart_id = parse_uuid(&cart_id)?;
    cart_service::delete_cart_by_id(state.store.as_ref(), cart_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
