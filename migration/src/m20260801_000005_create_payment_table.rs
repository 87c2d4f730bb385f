use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_event_table::Event,
    m20260801_000004_create_coupon_table::Coupon,
};

static FK_PAYMENT_EVENT_ID: &str = "fk_payment_event_id";
static FK_PAYMENT_USER_ID: &str = "fk_payment_user_id";
static FK_PAYMENT_COUPON_ID: &str = "fk_payment_coupon_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Payment::Id))
                    .col(uuid(Payment::EventId))
                    .col(uuid(Payment::UserId))
                    .col(uuid_null(Payment::CouponId))
                    .col(string(Payment::CustomerName))
                    .col(string(Payment::CustomerPhone))
                    .col(string(Payment::CustomerEmail))
                    .col(integer(Payment::TicketQuantity))
                    .col(double(Payment::TotalPrice))
                    .col(double(Payment::DiscountPrice).default(0.0))
                    .col(double(Payment::FinalPrice))
                    .col(string_len(Payment::Status, 16).default("pending"))
                    .col(string(Payment::PaymentMethodId))
                    .col(string(Payment::PaymentSessionId))
                    .col(timestamp(Payment::CreatedAt))
                    .col(timestamp(Payment::UpdatedAt))
                    .col(timestamp_null(Payment::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_EVENT_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::EventId)
                    .to_tbl(Event::Table)
                    .to_col(Event::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_USER_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_COUPON_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::CouponId)
                    .to_tbl(Coupon::Table)
                    .to_col(Coupon::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_PAYMENT_COUPON_ID, FK_PAYMENT_USER_ID, FK_PAYMENT_EVENT_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Payment::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    EventId,
    UserId,
    CouponId,
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    TicketQuantity,
    TotalPrice,
    DiscountPrice,
    FinalPrice,
    Status,
    PaymentMethodId,
    PaymentSessionId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
