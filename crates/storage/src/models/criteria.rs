use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Criteria {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_score: i32,
    pub weight: Decimal,
    /// Name of the competition this criterion scores
    pub competition: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
