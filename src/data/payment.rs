//! Payment listings: transactions for organizers, orders for buyers.
//!
//! Both listings follow the same shape. Count the rows the predicates match,
//! resolve a pagination window from the count, fetch that window, then load
//! the event each payment belongs to.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{
    sea_query::Expr, ConnectionTrait, JoinType, LoaderTrait, Order, RelationTrait, Value,
};
use uuid::Uuid;

use crate::{
    data::{
        options::{FetchOptions, Predicate},
        repository::Repository,
    },
    error::Error,
    model::paging::{ListQuery, Pagination},
};

pub type PaymentWithEvent = (entity::payment::Model, Option<entity::event::Model>);

/// Columns a caller may order payment listings by. Anything else is rejected
/// rather than interpolated into the query.
const SORTABLE_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "customer_name",
    "ticket_quantity",
    "total_price",
    "final_price",
    "status",
];

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn repository(&self) -> Repository<'a, C, entity::payment::Entity> {
        Repository::new(self.conn)
    }

    /// List payments received by events the given user organizes.
    pub async fn get_transactions(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<PaymentWithEvent>, Pagination), Error> {
        let predicates = Self::transaction_predicates(user_id, query)?;
        let options = || {
            FetchOptions::new()
                .with_query(predicates.clone())
                .with_join(JoinType::InnerJoin, entity::payment::Relation::Event.def())
        };

        self.list(query, options).await
    }

    /// List payments the given user made as a buyer. The joined user is the
    /// event's organizer, so search covers the organizer's name.
    pub async fn get_orders(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<PaymentWithEvent>, Pagination), Error> {
        let predicates = Self::order_predicates(user_id, query)?;
        let options = || {
            FetchOptions::new()
                .with_query(predicates.clone())
                .with_join(JoinType::InnerJoin, entity::payment::Relation::Event.def())
                .with_join(JoinType::InnerJoin, entity::event::Relation::User.def())
        };

        self.list(query, options).await
    }

    async fn list(
        &self,
        query: &ListQuery,
        options: impl Fn() -> FetchOptions,
    ) -> Result<(Vec<PaymentWithEvent>, Pagination), Error> {
        let repository = self.repository();

        let total = repository.count(options()).await?;

        let mut pagination = Pagination::new(query.page, query.page_size, total);
        if query.take_all {
            pagination.take_all();
        }

        let mut fetch = options()
            .with_offset(pagination.skip)
            .with_limit(pagination.page_size);
        fetch = match query.order_by.as_deref() {
            Some(column) if SORTABLE_COLUMNS.contains(&column) => fetch.with_order(
                Expr::cust(format!("payment.{column}")),
                if query.order_desc { Order::Desc } else { Order::Asc },
            ),
            Some(column) => {
                return Err(Error::ParseError(format!("cannot order by column: {column}")))
            }
            None => fetch.with_order(Expr::cust("payment.created_at"), Order::Desc),
        };

        let payments = repository.find(fetch).await?;
        let events = payments.load_one(entity::event::Entity, self.conn).await?;

        Ok((payments.into_iter().zip(events).collect(), pagination))
    }

    fn transaction_predicates(
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<Predicate>, Error> {
        let mut template = String::from("event.user_id = ?");
        let mut values: Vec<Value> = vec![user_id.into()];

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // LOWER on both sides keeps the match case-insensitive on every
            // backend; Postgres LIKE alone is case-sensitive.
            template.push_str(
                " AND (LOWER(payment.customer_name) LIKE LOWER(?) \
                 OR LOWER(event.name) LIKE LOWER(?))",
            );
            let pattern = format!("%{search}%");
            values.push(pattern.clone().into());
            values.push(pattern.into());
        }

        push_date_window(&mut template, &mut values, "payment.created_at", query)?;

        Ok(vec![Predicate::new(&template, values)])
    }

    fn order_predicates(user_id: Uuid, query: &ListQuery) -> Result<Vec<Predicate>, Error> {
        let mut template = String::from("payment.user_id = ?");
        let mut values: Vec<Value> = vec![user_id.into()];

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            template.push_str(
                " AND (LOWER(event.name) LIKE LOWER(?) \
                 OR LOWER(\"user\".user_name) LIKE LOWER(?))",
            );
            let pattern = format!("%{search}%");
            values.push(pattern.clone().into());
            values.push(pattern.into());
        }

        push_date_window(&mut template, &mut values, "payment.created_at", query)?;

        Ok(vec![Predicate::new(&template, values)])
    }
}

/// Constrain `column` to the query's inclusive day window, when both ends are
/// present.
pub(crate) fn push_date_window(
    template: &mut String,
    values: &mut Vec<Value>,
    column: &str,
    query: &ListQuery,
) -> Result<(), Error> {
    if let (Some(start), Some(end)) = (query.start_date.as_deref(), query.end_date.as_deref()) {
        template.push_str(&format!(" AND {column} BETWEEN ? AND ?"));
        values.push(day_start(start)?.into());
        values.push(day_end(end)?.into());
    }

    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| Error::ParseError(format!("invalid date: {input}")))
}

fn day_start(input: &str) -> Result<NaiveDateTime, Error> {
    Ok(parse_date(input)?.and_time(NaiveTime::MIN))
}

fn day_end(input: &str) -> Result<NaiveDateTime, Error> {
    let date = parse_date(input)?;
    date.and_hms_opt(23, 59, 59)
        .ok_or_else(|| Error::ParseError(format!("invalid date: {input}")))
}
