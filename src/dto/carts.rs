use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::line_items::{LineItemSerializerConfig, LineItemView},
    models::CartAggregate,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSerializerConfig {
    pub with_line_items: bool,
}

impl CartSerializerConfig {
    pub fn new(with_line_items: bool) -> Self {
        Self { with_line_items }
    }
}

/// JSON shape of a cart. Timestamps are Unix seconds.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub id: Uuid,
    pub total_in_euro_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItemView>>,
}

impl CartView {
    pub fn new(cart: &CartAggregate, config: CartSerializerConfig) -> Self {
        let line_items = config.with_line_items.then(|| {
            cart.line_items
                .iter()
                .map(|item| LineItemView::new(item, LineItemSerializerConfig::default()))
                .collect()
        });

        Self {
            id: cart.cart.id,
            total_in_euro_cents: cart.total_in_euro_cents(),
            created_at: cart.cart.created_at.timestamp(),
            updated_at: cart.cart.updated_at.timestamp(),
            line_items,
        }
    }
}
