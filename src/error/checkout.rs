use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Failures raised while validating or executing a checkout.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Checkout request contains no line items")]
    EmptyOrder,
    #[error("Line item for ticket type {0} has a non-positive quantity")]
    ZeroQuantityItem(Uuid),
    #[error("Ticket type {0} does not exist")]
    TicketTypeNotFound(Uuid),
    #[error("Ticket type {ticket_type_id} has {remaining} tickets left, {requested} requested")]
    SoldOut {
        ticket_type_id: Uuid,
        remaining: i32,
        requested: i32,
    },
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = match self {
            CheckoutError::TicketTypeNotFound(_) => StatusCode::NOT_FOUND,
            CheckoutError::SoldOut { .. } => StatusCode::CONFLICT,
            CheckoutError::EmptyOrder | CheckoutError::ZeroQuantityItem(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
