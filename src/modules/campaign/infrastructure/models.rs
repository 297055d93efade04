use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::modules::campaign::domain::CampaignStatus;

pub const CAMPAIGN_COLUMNS: &str = "id, brand_id, name, brief, budget_numeric, currency, \
     start_date, end_date, status, created_at, updated_at, brand:brands(name)";

pub const CAMPAIGN_CREATOR_COLUMNS: &str =
    "id, campaign_id, creator_id, status, quoted_fee_numeric, created_at";

// ============= CAMPAIGNS =============

// For reading; numeric and enum columns are kept loose and read by the mapper
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignRow {
    pub id: Uuid,
    #[serde(default)]
    pub brand_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub budget_numeric: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    // Embedded through the brand_id foreign key; absent on write responses
    #[serde(default)]
    pub brand: Option<BrandNameRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandNameRow {
    pub name: String,
}

// For inserting; the store assigns id and timestamps
#[derive(Debug, Clone, Serialize)]
pub struct NewCampaignRow {
    pub brand_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: CampaignStatus,
}

// For PATCH; absent fields are not sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignChangeset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    pub updated_at: DateTime<Utc>,
}

// ============= CAMPAIGN-CREATOR ASSOCIATION =============

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignCreatorRow {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub creator_id: Uuid,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub quoted_fee_numeric: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCampaignCreatorRow {
    pub campaign_id: Uuid,
    pub creator_id: Uuid,
}
