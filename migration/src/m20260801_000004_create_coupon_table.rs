use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_user_table::User;

static FK_COUPON_USER_ID: &str = "fk_coupon_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_uuid(Coupon::Id))
                    .col(uuid(Coupon::UserId))
                    .col(string(Coupon::Name))
                    .col(string(Coupon::Description))
                    .col(integer(Coupon::MinQuantity).default(0))
                    .col(double(Coupon::MinPrice).default(0.0))
                    .col(double(Coupon::PercentageValue))
                    .col(date(Coupon::ExpireDate))
                    .col(timestamp(Coupon::CreatedAt))
                    .col(timestamp(Coupon::UpdatedAt))
                    .col(timestamp_null(Coupon::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COUPON_USER_ID)
                    .from_tbl(Coupon::Table)
                    .from_col(Coupon::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COUPON_USER_ID)
                    .table(Coupon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    UserId,
    Name,
    Description,
    MinQuantity,
    MinPrice,
    PercentageValue,
    ExpireDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
