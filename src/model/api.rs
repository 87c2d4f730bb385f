use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing API route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
