use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_kos_table::Kos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KosPhotos::Table)
                    .if_not_exists()
                    .col(pk_auto(KosPhotos::Id))
                    .col(integer(KosPhotos::KosId))
                    .col(text(KosPhotos::Url))
                    .col(string_null(KosPhotos::PublicId))
                    .col(boolean(KosPhotos::IsPrimary).default(false))
                    .col(
                        timestamp_with_time_zone(KosPhotos::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kos_photos_kos_id")
                            .from(KosPhotos::Table, KosPhotos::KosId)
                            .to(Kos::Table, Kos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_kos_photos_kos_id")
                    .table(KosPhotos::Table)
                    .col(KosPhotos::KosId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KosPhotos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KosPhotos {
    Table,
    Id,
    KosId,
    Url,
    PublicId,
    IsPrimary,
    CreatedAt,
}
