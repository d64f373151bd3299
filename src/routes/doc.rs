use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        carts::CartView,
        line_items::{AddLineItemRequest, LineItemView, UpdateLineItemRequest},
        products::ProductPage,
    },
    models::Product,
    response::{Created, ErrorBody},
    routes::{carts, health, line_items, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        carts::create_cart,
        carts::get_cart,
        carts::delete_cart,
        line_items::add_line_item,
        line_items::get_line_item,
        line_items::update_line_item,
        line_items::delete_line_item,
        products::list_products,
        products::get_product,
    ),
    components(
        schemas(
            Product,
            ProductPage,
            CartView,
            LineItemView,
            AddLineItemRequest,
            UpdateLineItemRequest,
            Created,
            ErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Carts", description = "Cart endpoints"),
        (name = "Line items", description = "Line items of a cart"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
