use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_posts_table::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kos::Table)
                    .if_not_exists()
                    .col(pk_auto(Kos::Id))
                    .col(integer_uniq(Kos::PostId))
                    .col(text(Kos::Address))
                    .col(string(Kos::City))
                    .col(integer(Kos::TotalRooms))
                    .col(integer(Kos::OccupiedRooms).default(0))
                    .col(double_null(Kos::Latitude))
                    .col(double_null(Kos::Longitude))
                    .col(text_null(Kos::Facilities))
                    .col(string(Kos::KosType).default("campur"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kos_post_id")
                            .from(Kos::Table, Kos::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kos_city")
                    .table(Kos::Table)
                    .col(Kos::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Kos {
    Table,
    Id,
    PostId,
    Address,
    City,
    TotalRooms,
    OccupiedRooms,
    Latitude,
    Longitude,
    Facilities,
    KosType,
}
