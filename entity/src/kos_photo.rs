use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kos_photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kos_id: i32,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    /// CDN identifier, absent for photos attached by external URL.
    pub public_id: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kos::Entity",
        from = "Column::KosId",
        to = "super::kos::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Kos,
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
