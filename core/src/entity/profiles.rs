use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub age: i32,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
    #[sea_orm(column_type = "Double")]
    pub height: f64,
    pub gender: Option<String>,
    pub activity_level: String,
    #[sea_orm(column_type = "Text")]
    pub dietary_restrictions: String,
    #[sea_orm(column_type = "Text")]
    pub health_goal: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub protein_target: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub carbs_target: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub fat_target: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
