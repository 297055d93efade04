pub mod campaign_status;

pub use campaign_status::CampaignStatus;
