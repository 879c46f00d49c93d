use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub logged_at: DateTimeWithTimeZone,
    pub meal_type: String,
    #[sea_orm(column_type = "Text")]
    pub image_path: String,
    #[sea_orm(column_type = "Text")]
    pub thumbnail_path: String,
    #[sea_orm(column_type = "Double")]
    pub protein: f64,
    #[sea_orm(column_type = "Double")]
    pub carbs: f64,
    #[sea_orm(column_type = "Double")]
    pub fat: f64,
    #[sea_orm(column_type = "Double")]
    pub fiber: f64,
    #[sea_orm(column_type = "Double")]
    pub sugar: f64,
    #[sea_orm(column_type = "Double")]
    pub sodium: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub food_items: Json,
    #[sea_orm(column_type = "Double")]
    pub health_score: f64,
    #[sea_orm(column_type = "Double")]
    pub portion_quality_score: f64,
    #[sea_orm(column_type = "Double")]
    pub variety_score: f64,
    #[sea_orm(column_type = "Double")]
    pub nutrition_balance_score: f64,
    #[sea_orm(column_type = "Text")]
    pub recommendations: String,
    pub week_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
