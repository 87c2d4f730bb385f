use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_create_event_table::Event;

static FK_TICKET_TYPE_EVENT_ID: &str = "fk_ticket_type_event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketType::Table)
                    .if_not_exists()
                    .col(pk_uuid(TicketType::Id))
                    .col(uuid(TicketType::EventId))
                    .col(string(TicketType::Name))
                    .col(integer(TicketType::Quantity))
                    .col(integer(TicketType::Sale).default(0))
                    .col(double(TicketType::Price))
                    .col(timestamp(TicketType::CreatedAt))
                    .col(timestamp(TicketType::UpdatedAt))
                    .col(timestamp_null(TicketType::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_TYPE_EVENT_ID)
                    .from_tbl(TicketType::Table)
                    .from_col(TicketType::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_TYPE_EVENT_ID)
                    .table(TicketType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TicketType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TicketType {
    Table,
    Id,
    EventId,
    Name,
    Quantity,
    Sale,
    Price,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
