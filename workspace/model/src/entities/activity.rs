use sea_orm::entity::prelude::*;

/// A single logged exercise session.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The user who performed the activity.
    pub user_id: i32,
    /// Free-form kind of exercise, e.g. "Run" or "Swim".
    #[sea_orm(column_name = "type")]
    pub activity_type: String,
    /// Duration in minutes. Never negative.
    pub duration: i32,
    /// Never negative.
    pub calories: i32,
    /// Set by the store when the activity is created.
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
