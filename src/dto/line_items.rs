use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{LineItem, Product},
    routes::params::parse_uuid,
};

const DEFAULT_QUANTITY: i32 = 1;

/// Documented shape of `POST /api/carts/{cart_id}/line-items`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddLineItemRequest {
    pub product_id: Uuid,
    /// Defaults to 1.
    pub quantity: Option<i32>,
}

impl AddLineItemRequest {
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let payload = as_object(payload)?;
        let product_id = match payload.get("product_id") {
            Some(Value::String(raw)) => parse_uuid(raw)?,
            Some(other) => return Err(AppError::InvalidUuid(other.to_string())),
            None => return Err(AppError::BadRequest("product_id is required".into())),
        };
        let quantity = optional_quantity(payload.get("quantity"))?;

        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn quantity(&self) -> i32 {
        self.quantity.unwrap_or(DEFAULT_QUANTITY)
    }
}

/// Documented shape of `PATCH /api/carts/{cart_id}/line-items/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLineItemRequest {
    pub quantity: Option<i32>,
}

/// The changes requested for a line item. `None` leaves the quantity alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineItemUpdate {
    pub new_quantity: Option<i32>,
}

impl LineItemUpdate {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn with_quantity(quantity: i32) -> Self {
        Self {
            new_quantity: Some(quantity),
        }
    }

    /// Reads `{"quantity": <int>}`. A missing or null quantity means no
    /// change; any other non-integer is rejected.
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let payload = as_object(payload)?;
        Ok(Self {
            new_quantity: optional_quantity(payload.get("quantity"))?,
        })
    }
}

fn as_object(payload: &Value) -> AppResult<&serde_json::Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| AppError::BadRequest("request body must be a JSON object".into()))
}

fn optional_quantity(value: Option<&Value>) -> AppResult<Option<i32>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| AppError::BadRequest("quantity must be integer value".into())),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineItemSerializerConfig {
    pub with_cart_reference: bool,
}

impl LineItemSerializerConfig {
    pub fn new(with_cart_reference: bool) -> Self {
        Self {
            with_cart_reference,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LineItemView {
    pub id: Uuid,
    pub product: Product,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<Uuid>,
}

impl LineItemView {
    pub fn new(line_item: &LineItem, config: LineItemSerializerConfig) -> Self {
        Self {
            id: line_item.id,
            product: line_item.product.clone(),
            quantity: line_item.quantity,
            cart_id: config.with_cart_reference.then_some(line_item.cart_id),
        }
    }
}
