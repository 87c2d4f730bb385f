//! Declarative test builder.
//!
//! Queues schema setup for the ticketing tables and executes it during the
//! final `build()` call, yielding a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, setup::TestContext};

/// Builder for test initialization.
///
/// Methods can be chained and finalized with `build()`. By default no tables
/// are created, which is useful for exercising missing-table error paths.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
        }
    }

    /// Add every ticketing table: user, event, ticket_type, coupon, payment,
    /// payment_line, and ticket.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add the table for a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to a fresh in-memory database and create the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = self.tables;
        if self.include_core_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            tables.extend([
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::TicketType),
                schema.create_table_from_entity(entity::prelude::Coupon),
                schema.create_table_from_entity(entity::prelude::Payment),
                schema.create_table_from_entity(entity::prelude::PaymentLine),
                schema.create_table_from_entity(entity::prelude::Ticket),
            ]);
        }

        context.with_tables(tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
