use chrono::Utc;
use std::str::FromStr;

use crate::log_warn;
use crate::modules::campaign::domain::{
    Campaign, CampaignCreator, CampaignStatus, CampaignUpdate, NewCampaign,
};
use crate::modules::campaign::infrastructure::models::{
    CampaignChangeset, CampaignCreatorRow, CampaignRow, NewCampaignRow,
};
use crate::modules::creator::domain::value_objects::decimal_from_value;

pub struct CampaignMapper;

impl CampaignMapper {
    pub fn to_domain(row: CampaignRow) -> Campaign {
        Campaign {
            id: row.id,
            brand_id: row.brand_id,
            brand_name: row.brand.map(|brand| brand.name),
            name: row.name,
            brief: row.brief,
            budget: row.budget_numeric.as_ref().and_then(decimal_from_value),
            currency: row.currency,
            start_date: row.start_date,
            end_date: row.end_date,
            status: Self::status(row.status.as_deref()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    pub fn to_insert(campaign: &NewCampaign) -> NewCampaignRow {
        NewCampaignRow {
            brand_id: campaign.brand_id,
            name: campaign.name.trim().to_string(),
            brief: campaign.brief.clone(),
            budget_numeric: campaign.budget,
            currency: campaign.currency.clone(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            status: CampaignStatus::Draft,
        }
    }

    pub fn to_changeset(update: &CampaignUpdate) -> CampaignChangeset {
        CampaignChangeset {
            name: update.name.as_ref().map(|n| n.trim().to_string()),
            brief: update.brief.clone(),
            budget_numeric: update.budget,
            currency: update.currency.clone(),
            start_date: update.start_date,
            end_date: update.end_date,
            status: update.status,
            updated_at: Utc::now(),
        }
    }

    pub fn entry_to_domain(row: CampaignCreatorRow) -> CampaignCreator {
        CampaignCreator {
            id: row.id,
            campaign_id: row.campaign_id,
            creator_id: row.creator_id,
            status: Self::status(row.status.as_deref()),
            quoted_fee: row.quoted_fee_numeric.as_ref().and_then(decimal_from_value),
            created_at: row.created_at,
        }
    }

    // Unknown enum values fall back to draft rather than failing the row
    fn status(raw: Option<&str>) -> CampaignStatus {
        match raw {
            None => CampaignStatus::Draft,
            Some(raw) => CampaignStatus::from_str(raw).unwrap_or_else(|e| {
                log_warn!("{}; treating as draft", e);
                CampaignStatus::Draft
            }),
        }
    }
}
