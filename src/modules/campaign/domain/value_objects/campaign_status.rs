use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a campaign (and of a creator's participation in it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Sent,
    Negotiating,
    Signed,
    Live,
    Completed,
    Archived,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Sent => "sent",
            CampaignStatus::Negotiating => "negotiating",
            CampaignStatus::Signed => "signed",
            CampaignStatus::Live => "live",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Sent => "Sent",
            CampaignStatus::Negotiating => "Negotiating",
            CampaignStatus::Signed => "Signed",
            CampaignStatus::Live => "Live",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(CampaignStatus::Draft),
            "sent" => Ok(CampaignStatus::Sent),
            "negotiating" => Ok(CampaignStatus::Negotiating),
            "signed" => Ok(CampaignStatus::Signed),
            "live" => Ok(CampaignStatus::Live),
            "completed" => Ok(CampaignStatus::Completed),
            "archived" => Ok(CampaignStatus::Archived),
            other => Err(format!("Unknown campaign status '{}'", other)),
        }
    }
}
