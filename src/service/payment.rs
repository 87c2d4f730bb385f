//! Checkout workflow and payment listings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    data::{
        payment::{PaymentRepository, PaymentWithEvent},
        repository::Repository,
    },
    error::{checkout::CheckoutError, Error},
    model::{
        paging::{ListQuery, Pagination},
        payment::CheckoutRequest,
    },
    util::code::generate_code,
};

const TICKET_CODE_PREFIX: &str = "TK";
const INSERT_BATCH_SIZE: usize = 100;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a checkout: reserve capacity on every requested ticket type,
    /// then create the payment, one payment line per line item, and one coded
    /// ticket per unit of quantity. The whole workflow runs in a single
    /// transaction, so a failure at any step leaves no partial order behind.
    pub async fn checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<entity::payment::Model, Error> {
        if request.items.is_empty() {
            return Err(CheckoutError::EmptyOrder.into());
        }
        if let Some(item) = request.items.iter().find(|item| item.quantity <= 0) {
            return Err(CheckoutError::ZeroQuantityItem(item.ticket_type_id).into());
        }

        let ticket_quantity: i32 = request.items.iter().map(|item| item.quantity).sum();

        let payment = self
            .db
            .transaction::<_, entity::payment::Model, Error>(move |txn| {
                Box::pin(async move {
                    let now = Utc::now().naive_utc();

                    // Capacity is reserved on the transactional handle, so a
                    // concurrent checkout either sees the bumped sale count or
                    // none of this order.
                    for item in &request.items {
                        let ticket_type =
                            entity::prelude::TicketType::find_by_id(item.ticket_type_id)
                                .filter(entity::ticket_type::Column::DeletedAt.is_null())
                                .one(txn)
                                .await?
                                .ok_or(CheckoutError::TicketTypeNotFound(item.ticket_type_id))?;

                        let remaining = ticket_type.quantity - ticket_type.sale;
                        if remaining < item.quantity {
                            return Err(CheckoutError::SoldOut {
                                ticket_type_id: item.ticket_type_id,
                                remaining,
                                requested: item.quantity,
                            }
                            .into());
                        }

                        let sold = ticket_type.sale + item.quantity;
                        let mut ticket_type = ticket_type.into_active_model();
                        ticket_type.sale = ActiveValue::Set(sold);
                        ticket_type.updated_at = ActiveValue::Set(now);
                        ticket_type.update(txn).await?;
                    }

                    let payment_id = Uuid::new_v4();
                    let payment = Repository::<_, entity::payment::Entity>::new(txn)
                        .create(entity::payment::ActiveModel {
                            id: ActiveValue::Set(payment_id),
                            event_id: ActiveValue::Set(request.event_id),
                            user_id: ActiveValue::Set(request.user_id),
                            coupon_id: ActiveValue::Set(request.coupon_id),
                            customer_name: ActiveValue::Set(request.customer_name.clone()),
                            customer_phone: ActiveValue::Set(request.customer_phone.clone()),
                            customer_email: ActiveValue::Set(request.customer_email.clone()),
                            ticket_quantity: ActiveValue::Set(ticket_quantity),
                            total_price: ActiveValue::Set(request.total_price),
                            discount_price: ActiveValue::Set(request.discount_price),
                            final_price: ActiveValue::Set(request.final_price),
                            status: ActiveValue::Set(entity::payment::PaymentStatus::Success),
                            payment_method_id: ActiveValue::Set(request.payment_method_id.clone()),
                            payment_session_id: ActiveValue::Set(
                                request.payment_session_id.clone(),
                            ),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                            deleted_at: ActiveValue::Set(None),
                        })
                        .await?;

                    let lines = request
                        .items
                        .iter()
                        .map(|item| entity::payment_line::ActiveModel {
                            id: ActiveValue::Set(Uuid::new_v4()),
                            payment_id: ActiveValue::Set(payment_id),
                            event_id: ActiveValue::Set(request.event_id),
                            user_id: ActiveValue::Set(request.user_id),
                            ticket_type_id: ActiveValue::Set(item.ticket_type_id),
                            quantity: ActiveValue::Set(item.quantity),
                            total_price: ActiveValue::Set(
                                item.price * f64::from(item.quantity),
                            ),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                            deleted_at: ActiveValue::Set(None),
                        })
                        .collect();
                    Repository::<_, entity::payment_line::Entity>::new(txn)
                        .create_in_batches(lines, INSERT_BATCH_SIZE)
                        .await?;

                    let mut tickets = Vec::with_capacity(ticket_quantity as usize);
                    for item in &request.items {
                        for _ in 0..item.quantity {
                            tickets.push(entity::ticket::ActiveModel {
                                id: ActiveValue::Set(Uuid::new_v4()),
                                ticket_no: ActiveValue::Set(generate_code(TICKET_CODE_PREFIX)),
                                customer_name: ActiveValue::Set(request.customer_name.clone()),
                                customer_phone: ActiveValue::Set(request.customer_phone.clone()),
                                customer_email: ActiveValue::Set(request.customer_email.clone()),
                                ticket_type_id: ActiveValue::Set(item.ticket_type_id),
                                event_id: ActiveValue::Set(request.event_id),
                                user_id: ActiveValue::Set(request.user_id),
                                payment_id: ActiveValue::Set(payment_id),
                                status: ActiveValue::Set(entity::ticket::TicketStatus::Valid),
                                created_at: ActiveValue::Set(now),
                                updated_at: ActiveValue::Set(now),
                                deleted_at: ActiveValue::Set(None),
                            });
                        }
                    }
                    Repository::<_, entity::ticket::Entity>::new(txn)
                        .create_in_batches(tickets, INSERT_BATCH_SIZE)
                        .await?;

                    Ok(payment)
                })
            })
            .await
            .map_err(Error::from)?;

        tracing::info!(
            payment_id = %payment.id,
            ticket_quantity,
            "Checkout completed"
        );

        Ok(payment)
    }

    /// List payments received by events the user organizes.
    pub async fn get_transactions(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<PaymentWithEvent>, Pagination), Error> {
        PaymentRepository::new(self.db)
            .get_transactions(user_id, query)
            .await
    }

    /// List payments the user made as a buyer.
    pub async fn get_orders(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<PaymentWithEvent>, Pagination), Error> {
        PaymentRepository::new(self.db)
            .get_orders(user_id, query)
            .await
    }
}
