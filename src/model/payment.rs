//! Request and response types for the payment routes.

use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::paging::Pagination;

/// One ticket type in the cart.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TicketLineItem {
    pub ticket_type_id: Uuid,
    /// Display name of the ticket type at the time of purchase.
    pub name: String,
    pub quantity: i32,
    /// Unit price at the time of purchase.
    pub price: f64,
}

/// A finished checkout: which event, who is buying, and what is in the cart.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub coupon_id: Option<Uuid>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub payment_method_id: String,
    pub payment_session_id: String,
    pub total_price: f64,
    pub discount_price: f64,
    pub final_price: f64,
    pub items: Vec<TicketLineItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub event_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub ticket_quantity: i32,
    pub total_price: f64,
    pub discount_price: f64,
    pub final_price: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(payment: entity::payment::Model) -> Self {
        PaymentDto {
            id: payment.id,
            event_id: payment.event_id,
            customer_name: payment.customer_name,
            customer_email: payment.customer_email,
            ticket_quantity: payment.ticket_quantity,
            total_price: payment.total_price,
            discount_price: payment.discount_price,
            final_price: payment.final_price,
            status: payment.status.to_value(),
            created_at: payment.created_at,
        }
    }
}

/// Summary of the event a payment belongs to.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub venue: String,
}

impl From<entity::event::Model> for EventSummaryDto {
    fn from(event: entity::event::Model) -> Self {
        EventSummaryDto {
            id: event.id,
            name: event.name,
            venue: event.venue,
        }
    }
}

/// A payment row joined with its event, as returned by the list endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionDto {
    #[serde(flatten)]
    pub payment: PaymentDto,
    pub event: Option<EventSummaryDto>,
}

impl TransactionDto {
    pub fn new(payment: entity::payment::Model, event: Option<entity::event::Model>) -> Self {
        TransactionDto {
            payment: payment.into(),
            event: event.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionListDto {
    pub items: Vec<TransactionDto>,
    pub metadata: Pagination,
}
