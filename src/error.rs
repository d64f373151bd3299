use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::response::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cart with UUID \"{0}\" not found.")]
    CartNotFound(Uuid),

    #[error("Line Item with UUID \"{0}\" not found.")]
    LineItemNotFound(Uuid),

    #[error("Product with ID \"{0}\" not found.")]
    ProductNotFound(Uuid),

    #[error("Not Found")]
    NotFound,

    #[error("\"{0}\" is not a valid UUID.")]
    InvalidUuid(String),

    #[error("Quantity must be greater than zero.")]
    InvalidQuantity(i32),

    #[error("{0}")]
    BadRequest(String),

    #[error("Product \"{product_id}\" is already in the Cart \"{cart_id}\".")]
    ProductAlreadyInCart { cart_id: Uuid, product_id: Uuid },

    #[error("Database error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CartNotFound(_)
            | AppError::LineItemNotFound(_)
            | AppError::ProductNotFound(_)
            | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidUuid(_) | AppError::InvalidQuantity(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ProductAlreadyInCart { .. } => StatusCode::CONFLICT,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database failure"),
            AppError::Internal(err) => tracing::error!(error = ?err, "internal failure"),
            _ => tracing::debug!(status = %status, error = %self, "request rejected"),
        }

        (status, axum::Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
