use axum::{
    Json,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::product_service::{DEFAULT_PAGE_SIZE, effective_page_size},
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: Option<i64>,
    /// Items per page, default 50, at most 100.
    pub limit: Option<i64>,
}

impl Pagination {
    /// Returns `(page, limit)` with defaults and bounds applied.
    pub fn normalize(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = effective_page_size(self.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        (page, limit)
    }
}

pub fn parse_uuid(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidUuid(raw.to_string()))
}

pub fn pagination(query: Result<Query<Pagination>, QueryRejection>) -> AppResult<Pagination> {
    query
        .map(|Query(pagination)| pagination)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

pub fn json_payload(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
