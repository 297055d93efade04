use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::campaign::domain::value_objects::CampaignStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub brand_id: Option<Uuid>,
    /// Owning brand's name, when the read embedded it
    pub brand_name: Option<String>,
    pub name: String,
    pub brief: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: CampaignStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Applies the present fields of `update`, leaving the rest untouched
    pub fn apply(&mut self, update: &CampaignUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(brief) = &update.brief {
            self.brief = Some(brief.clone());
        }
        if let Some(budget) = update.budget {
            self.budget = Some(budget);
        }
        if let Some(currency) = &update.currency {
            self.currency = Some(currency.clone());
        }
        if let Some(start) = update.start_date {
            self.start_date = Some(start);
        }
        if let Some(end) = update.end_date {
            self.end_date = Some(end);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Fields supplied when creating a campaign; the store assigns id and timestamps
///
/// Every campaign belongs to a brand; a nil `brand_id` is rejected before the write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub brand_id: Uuid,
    pub name: String,
    pub brief: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl NewCampaign {
    pub fn new(brand_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            brand_id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    pub fn with_budget(mut self, budget: f64, currency: impl Into<String>) -> Self {
        self.budget = Some(budget);
        self.currency = Some(currency.into());
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }
}

/// Partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub name: Option<String>,
    pub brief: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<CampaignStatus>,
}

impl CampaignUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
