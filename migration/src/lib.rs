pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_posts_table;
mod m20260301_000003_create_kos_table;
mod m20260301_000004_create_kos_photos_table;
mod m20260302_000005_create_bookings_table;
mod m20260302_000006_create_favorites_table;
mod m20260302_000007_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_posts_table::Migration),
            Box::new(m20260301_000003_create_kos_table::Migration),
            Box::new(m20260301_000004_create_kos_photos_table::Migration),
            Box::new(m20260302_000005_create_bookings_table::Migration),
            Box::new(m20260302_000006_create_favorites_table::Migration),
            Box::new(m20260302_000007_create_reviews_table::Migration),
        ]
    }
}
