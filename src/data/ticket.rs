//! Ticket listings for buyers.

use sea_orm::{
    sea_query::Expr, ConnectionTrait, JoinType, LoaderTrait, Order, RelationTrait, Value,
};
use uuid::Uuid;

use crate::{
    data::{
        options::{FetchOptions, Predicate},
        payment::push_date_window,
        repository::Repository,
    },
    error::Error,
    model::paging::{ListQuery, Pagination},
};

pub type TicketWithType = (entity::ticket::Model, Option<entity::ticket_type::Model>);

/// Columns a caller may order ticket listings by. Anything else is rejected
/// rather than interpolated into the query.
const SORTABLE_COLUMNS: &[&str] = &[
    "created_at",
    "updated_at",
    "customer_name",
    "ticket_no",
    "status",
];

pub struct TicketRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn repository(&self) -> Repository<'a, C, entity::ticket::Entity> {
        Repository::new(self.conn)
    }

    /// List tickets the given user holds, newest first unless ordered
    /// otherwise, each paired with its ticket type.
    pub async fn get_created_tickets(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<TicketWithType>, Pagination), Error> {
        let predicates = Self::predicates(user_id, query)?;
        let options = || {
            FetchOptions::new()
                .with_query(predicates.clone())
                .with_join(JoinType::InnerJoin, entity::ticket::Relation::Event.def())
                .with_join(
                    JoinType::InnerJoin,
                    entity::ticket::Relation::TicketType.def(),
                )
        };

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
                Expr::cust(format!("ticket.{column}")),
                if query.order_desc { Order::Desc } else { Order::Asc },
            ),
            Some(column) => {
                return Err(Error::ParseError(format!("cannot order by column: {column}")))
            }
            None => fetch.with_order(Expr::cust("ticket.created_at"), Order::Desc),
        };

        let tickets = repository.find(fetch).await?;
        let ticket_types = tickets
            .load_one(entity::ticket_type::Entity, self.conn)
            .await?;

        Ok((tickets.into_iter().zip(ticket_types).collect(), pagination))
    }

    fn predicates(user_id: Uuid, query: &ListQuery) -> Result<Vec<Predicate>, Error> {
        let mut template = String::from("ticket.user_id = ?");
        let mut values: Vec<Value> = vec![user_id.into()];

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            // LOWER on both sides keeps the match case-insensitive on every
            // backend; Postgres LIKE alone is case-sensitive.
            template.push_str(
                " AND (LOWER(ticket.ticket_no) LIKE LOWER(?) \
                 OR LOWER(ticket.customer_name) LIKE LOWER(?) \
                 OR LOWER(event.name) LIKE LOWER(?) \
                 OR LOWER(ticket_type.name) LIKE LOWER(?))",
            );
            let pattern = format!("%{search}%");
            for _ in 0..4 {
                values.push(pattern.clone().into());
            }
        }

        push_date_window(&mut template, &mut values, "ticket.created_at", query)?;

        Ok(vec![Predicate::new(&template, values)])
    }
}
