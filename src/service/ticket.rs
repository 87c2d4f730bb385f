//! Ticket listings.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::ticket::{TicketRepository, TicketWithType},
    error::Error,
    model::paging::{ListQuery, Pagination},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List tickets the user holds, each paired with its ticket type.
    pub async fn get_created_tickets(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<TicketWithType>, Pagination), Error> {
        TicketRepository::new(self.db)
            .get_created_tickets(user_id, query)
            .await
    }
}
