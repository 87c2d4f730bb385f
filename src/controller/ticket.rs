//! Ticket API routes.

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
        ticket::{TicketDto, TicketListDto},
    },
    service::ticket::TicketService,
};

pub static TICKET_TAG: &str = "ticket";

/// List tickets the user holds.
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "A page of tickets", body = TicketListDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    )
)]
pub async fn get_created_tickets(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let (rows, pagination) = TicketService::new(&state.db)
        .get_created_tickets(query.user_id, &query)
        .await?;

    Ok(Json(TicketListDto {
        items: rows
            .into_iter()
            .map(|(ticket, ticket_type)| TicketDto::new(ticket, ticket_type))
            .collect(),
        metadata: pagination,
    }))
}
