use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Renter who placed the booking.
    pub user_id: i32,
    pub kos_id: i32,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub duration_months: i32,
    pub total_price: i64,
    /// One of `pending`, `confirmed`, `cancelled`, `completed`.
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::kos::Entity",
        from = "Column::KosId",
        to = "super::kos::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Kos,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::kos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
