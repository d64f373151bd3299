use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::line_items::{
        AddLineItemRequest, LineItemSerializerConfig, LineItemUpdate, LineItemView,
        UpdateLineItemRequest,
    },
    error::AppResult,
    response::{Created, ErrorBody},
    routes::params::{json_payload, parse_uuid},
    services::{cart_service, line_item_service, product_service},
    state::AppState,
};

/// Line item routes, relative to `/carts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{cart_id}/line-items", post(add_line_item))
        .route(
            "/{cart_id}/line-items/{line_item_id}",
            get(get_line_item)
                .patch(update_line_item)
                .delete(delete_line_item),
        )
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/line-items",
    params(
        ("cart_id" = String, Path, description = "Cart ID")
    ),
    request_body = AddLineItemRequest,
    responses(
        (status = 201, description = "Line item created", body = Created),
        (status = 400, description = "Invalid UUID, payload or quantity", body = ErrorBody),
        (status = 404, description = "Cart or product not found", body = ErrorBody),
        (status = 409, description = "Product already in cart", body = ErrorBody),
    ),
    tag = "Line items"
)]
pub async fn add_line_item(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let store = state.store.as_ref();
    let cart = cart_service::get_cart_by_id(store, parse_uuid(&cart_id)?).await?;

    let request = AddLineItemRequest::from_payload(&json_payload(payload)?)?;
    let product = product_service::get_product(store, request.product_id).await?;

    let line_item =
        line_item_service::create_by_cart_and_product(store, &cart, product, request.quantity())
            .await?;

    Ok((StatusCode::CREATED, Json(Created { id: line_item.id })))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}/line-items/{line_item_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("line_item_id" = String, Path, description = "Line item ID")
    ),
    responses(
        (status = 200, description = "Line item", body = LineItemView),
        (status = 400, description = "Invalid UUID", body = ErrorBody),
        (status = 404, description = "Line item not found in this cart", body = ErrorBody),
    ),
    tag = "Line items"
)]
pub async fn get_line_item(
    State(state): State<AppState>,
    Path((cart_id, line_item_id)): Path<(String, String)>,
) -> AppResult<Json<LineItemView>> {
    let cart_id = parse_uuid(&cart_id)?;
    let line_item_id = parse_uuid(&line_item_id)?;

    let line_item =
        line_item_service::get_line_item_for_cart(state.store.as_ref(), line_item_id, cart_id)
            .await?;

    Ok(Json(LineItemView::new(
        &line_item,
        LineItemSerializerConfig::new(true),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/carts/{cart_id}/line-items/{line_item_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("line_item_id" = String, Path, description = "Line item ID")
    ),
    request_body = UpdateLineItemRequest,
    responses(
        (status = 204, description = "Line item updated, or removed when quantity <= 0"),
        (status = 400, description = "Invalid UUID or payload", body = ErrorBody),
        (status = 404, description = "Line item not found in this cart", body = ErrorBody),
    ),
    tag = "Line items"
)]
pub async fn update_line_item(
    State(state): State<AppState>,
    Path((cart_id, line_item_id)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<StatusCode> {
    let store = state.store.as_ref();
    // The line item is resolved before the body is read: a missing item is a
    // 404 even when the payload is also invalid.
    let line_item = line_item_service::get_line_item_for_cart(
        store,
        parse_uuid(&line_item_id)?,
        parse_uuid(&cart_id)?,
    )
    .await?;

    let update = LineItemUpdate::from_payload(&json_payload(payload)?)?;
    line_item_service::update_line_item(store, line_item, update).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}/line-items/{line_item_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("line_item_id" = String, Path, description = "Line item ID")
    ),
    responses(
        (status = 204, description = "Line item deleted"),
        (status = 400, description = "Invalid UUID", body = ErrorBody),
        (status = 404, description = "Line item not found in this cart", body = ErrorBody),
    ),
    tag = "Line items"
)]
pub async fn delete_line_item(
    State(state): State<AppState>,
    Path((cart_id, line_item_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let line_item_id = parse_uuid(&line_item_id)?;
    let cart_id = parse_uuid(&cart_id)?;

    line_item_service::delete_line_item_by_id_and_cart(state.store.as_ref(), line_item_id, cart_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
