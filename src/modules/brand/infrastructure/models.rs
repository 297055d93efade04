use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

pub const BRAND_COLUMNS: &str = "id, name, owner_id, billing_email, created_at";

// For reading
#[derive(Debug, Clone, Deserialize)]
pub struct BrandRow {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    #[serde(default)]
    pub billing_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
