use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One tracked inventory line. `submit_by_date` is intentionally not a
/// column; it is derived at read time from `due_date` and `lead_time_weeks`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub manufacturer: Option<String>,
    #[sea_orm(column_name = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
    pub lead_time_weeks: Option<i32>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
