use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_event_table::Event,
    m20260801_000003_create_ticket_type_table::TicketType,
    m20260801_000005_create_payment_table::Payment,
};

static FK_PAYMENT_LINE_PAYMENT_ID: &str = "fk_payment_line_payment_id";
static FK_PAYMENT_LINE_EVENT_ID: &str = "fk_payment_line_event_id";
static FK_PAYMENT_LINE_USER_ID: &str = "fk_payment_line_user_id";
static FK_PAYMENT_LINE_TICKET_TYPE_ID: &str = "fk_payment_line_ticket_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentLine::Table)
                    .if_not_exists()
                    .col(pk_uuid(PaymentLine::Id))
                    .col(uuid(PaymentLine::PaymentId))
                    .col(uuid(PaymentLine::EventId))
                    .col(uuid(PaymentLine::UserId))
                    .col(uuid(PaymentLine::TicketTypeId))
                    .col(integer(PaymentLine::Quantity))
                    .col(double(PaymentLine::TotalPrice))
                    .col(timestamp(PaymentLine::CreatedAt))
                    .col(timestamp(PaymentLine::UpdatedAt))
                    .col(timestamp_null(PaymentLine::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_LINE_PAYMENT_ID)
                    .from_tbl(PaymentLine::Table)
                    .from_col(PaymentLine::PaymentId)
                    .to_tbl(Payment::Table)
                    .to_col(Payment::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_LINE_EVENT_ID)
                    .from_tbl(PaymentLine::Table)
                    .from_col(PaymentLine::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_LINE_USER_ID)
                    .from_tbl(PaymentLine::Table)
                    .from_col(PaymentLine::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_LINE_TICKET_TYPE_ID)
                    .from_tbl(PaymentLine::Table)
                    .from_col(PaymentLine::TicketTypeId)
                    .to_tbl(TicketType::Table)
                    .to_col(TicketType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_PAYMENT_LINE_TICKET_TYPE_ID,
            FK_PAYMENT_LINE_USER_ID,
            FK_PAYMENT_LINE_EVENT_ID,
            FK_PAYMENT_LINE_PAYMENT_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(PaymentLine::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(PaymentLine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PaymentLine {
    Table,
    Id,
    PaymentId,
    EventId,
    UserId,
    TicketTypeId,
    Quantity,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
