use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_event_table::Event,
    m20260801_000003_create_ticket_type_table::TicketType,
    m20260801_000005_create_payment_table::Payment,
};

static FK_TICKET_TICKET_TYPE_ID: &str = "fk_ticket_ticket_type_id";
static FK_TICKET_EVENT_ID: &str = "fk_ticket_event_id";
static FK_TICKET_USER_ID: &str = "fk_ticket_user_id";
static FK_TICKET_PAYMENT_ID: &str = "fk_ticket_payment_id";
static IDX_TICKET_TICKET_NO: &str = "idx_ticket_ticket_no";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_uuid(Ticket::Id))
                    .col(string(Ticket::TicketNo))
                    .col(string(Ticket::CustomerName))
                    .col(string(Ticket::CustomerPhone))
                    .col(string(Ticket::CustomerEmail))
                    .col(uuid(Ticket::TicketTypeId))
                    .col(uuid(Ticket::EventId))
                    .col(uuid(Ticket::UserId))
                    .col(uuid(Ticket::PaymentId))
                    .col(integer(Ticket::Status).default(1))
                    .col(timestamp(Ticket::CreatedAt))
                    .col(timestamp(Ticket::UpdatedAt))
                    .col(timestamp_null(Ticket::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Unique index on the human-presentable code; this is the backstop
        // for generator collisions under concurrent checkouts.
        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_TICKET_NO)
                    .table(Ticket::Table)
                    .col(Ticket::TicketNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_TICKET_TYPE_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::TicketTypeId)
                    .to_tbl(TicketType::Table)
                    .to_col(TicketType::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_EVENT_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_USER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_PAYMENT_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::PaymentId)
                    .to_tbl(Payment::Table)
                    .to_col(Payment::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_TICKET_PAYMENT_ID,
            FK_TICKET_USER_ID,
            FK_TICKET_EVENT_ID,
            FK_TICKET_TICKET_TYPE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Ticket::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_TICKET_NO)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    TicketNo,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    TicketTypeId,
    EventId,
    UserId,
    PaymentId,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
