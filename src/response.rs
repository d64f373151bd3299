use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a `201 Created` answer: the identifier of the new resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    pub id: Uuid,
}
