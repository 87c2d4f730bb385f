//! Payment API routes.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        paging::ListQuery,
        payment::{CheckoutRequest, PaymentDto, TransactionDto, TransactionListDto},
    },
    service::payment::PaymentService,
};

pub static PAYMENT_TAG: &str = "payment";

/// Execute a checkout, creating the payment, its lines, and its tickets.
#[utoipa::path(
    post,
    path = "/api/payments/checkout",
    tag = PAYMENT_TAG,
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Checkout completed", body = PaymentDto),
        (status = 400, description = "Empty cart or non-positive quantity", body = ErrorDto),
        (status = 404, description = "Unknown ticket type", body = ErrorDto),
        (status = 409, description = "Not enough capacity left", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, Error> {
    let payment = PaymentService::new(&state.db).checkout(request).await?;

    Ok(Json(PaymentDto::from(payment)))
}

/// List payments received by events the user organizes.
#[utoipa::path(
    get,
    path = "/api/payments/transactions",
    tag = PAYMENT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "A page of transactions", body = TransactionListDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (rows, pagination) = PaymentService::new(&state.db)
        .get_transactions(query.user_id, &query)
        .await?;

    Ok(Json(TransactionListDto {
        items: rows
            .into_iter()
            .map(|(payment, event)| TransactionDto::new(payment, event))
            .collect(),
        metadata: pagination,
    }))
}

/// List payments the user made as a buyer.
#[utoipa::path(
    get,
    path = "/api/payments/orders",
    tag = PAYMENT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "A page of orders", body = TransactionListDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (rows, pagination) = PaymentService::new(&state.db)
        .get_orders(query.user_id, &query)
        .await?;

    Ok(Json(TransactionListDto {
        items: rows
            .into_iter()
            .map(|(payment, event)| TransactionDto::new(payment, event))
            .collect(),
        metadata: pagination,
    }))
}
