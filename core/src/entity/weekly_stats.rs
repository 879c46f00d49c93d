use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "weekly_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: Date,
    pub week_end_date: Date,
    pub total_meals: i32,
    #[sea_orm(column_type = "Double")]
    pub average_protein: f64,
    #[sea_orm(column_type = "Double")]
    pub average_carbs: f64,
    #[sea_orm(column_type = "Double")]
    pub average_fat: f64,
    #[sea_orm(column_type = "Double")]
    pub average_fiber: f64,
    #[sea_orm(column_type = "Double")]
    pub average_sugar: f64,
    #[sea_orm(column_type = "Double")]
    pub average_sodium: f64,
    #[sea_orm(column_type = "Double")]
    pub average_health_score: f64,
    #[sea_orm(column_type = "Double")]
    pub average_portion_quality_score: f64,
    #[sea_orm(column_type = "Double")]
    pub average_variety_score: f64,
    #[sea_orm(column_type = "Double")]
    pub average_nutrition_balance_score: f64,
    #[sea_orm(column_type = "Double")]
    pub protein_percent: f64,
    #[sea_orm(column_type = "Double")]
    pub carbs_percent: f64,
    #[sea_orm(column_type = "Double")]
    pub fat_percent: f64,
    pub best_meal_id: Option<Uuid>,
    pub worst_meal_id: Option<Uuid>,
    pub weekly_trend: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
