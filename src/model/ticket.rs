//! Response types for the ticket routes.

use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::paging::Pagination;

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDto {
    pub id: Uuid,
    /// Human-presentable code printed on the ticket.
    pub ticket_no: String,
    pub event_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub status: i32,
    pub created_at: NaiveDateTime,
    /// Name of the ticket type, when it still exists.
    pub ticket_type: Option<String>,
}

impl TicketDto {
    pub fn new(
        ticket: entity::ticket::Model,
        ticket_type: Option<entity::ticket_type::Model>,
    ) -> Self {
        TicketDto {
            id: ticket.id,
            ticket_no: ticket.ticket_no,
            event_id: ticket.event_id,
            customer_name: ticket.customer_name,
            customer_email: ticket.customer_email,
            status: ticket.status.to_value(),
            created_at: ticket.created_at,
            ticket_type: ticket_type.map(|ticket_type| ticket_type.name),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketListDto {
    pub items: Vec<TicketDto>,
    pub metadata: Pagination,
}
