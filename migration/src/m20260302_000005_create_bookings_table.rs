use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_users_table::Users, m20260301_000003_create_kos_table::Kos};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::UserId))
                    .col(integer(Bookings::KosId))
                    .col(date(Bookings::CheckInDate))
                    .col(date(Bookings::CheckOutDate))
                    .col(integer(Bookings::DurationMonths))
                    .col(big_integer(Bookings::TotalPrice))
                    .col(string(Bookings::Status).default("pending"))
                    .col(text_null(Bookings::Notes))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Bookings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_kos_id")
                            .from(Bookings::Table, Bookings::KosId)
                            .to(Kos::Table, Kos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability checks scan by kos and status.
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_kos_status")
                    .table(Bookings::Table)
                    .col(Bookings::KosId)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_user_id")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    UserId,
    KosId,
    CheckInDate,
    CheckOutDate,
    DurationMonths,
    TotalPrice,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
