use sea_orm::entity::prelude::*;

/// Difficulty labels used by the bundled data. The column holds any label of
/// at most 20 characters.
pub mod difficulty {
    pub const EASY: &str = "Easy";
    pub const MEDIUM: &str = "Medium";
    pub const HARD: &str = "Hard";
}

/// A suggested workout routine. Not tied to any user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workouts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub difficulty: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
