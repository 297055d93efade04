use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::campaign::domain::value_objects::CampaignStatus;

/// A creator's participation in a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCreator {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub creator_id: Uuid,
    pub status: CampaignStatus,
    pub quoted_fee: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of asking for a creator to join a campaign
///
/// The store enforces one row per (campaign, creator) pair, so a repeated
/// request is reported as `AlreadyAdded` rather than as a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "entry", rename_all = "snake_case")]
pub enum AddCreatorOutcome {
    Added(CampaignCreator),
    AlreadyAdded,
}

impl AddCreatorOutcome {
    pub fn was_added(&self) -> bool {
        matches!(self, AddCreatorOutcome::Added(_))
    }

    pub fn entry(&self) -> Option<&CampaignCreator> {
        match self {
            AddCreatorOutcome::Added(entry) => Some(entry),
            AddCreatorOutcome::AlreadyAdded => None,
        }
    }

    /// Short user-facing notice for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            AddCreatorOutcome::Added(_) => "Creator added to campaign",
            AddCreatorOutcome::AlreadyAdded => "Creator is already in this campaign",
        }
    }
}
