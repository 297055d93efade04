pub mod campaign_repository;

pub use campaign_repository::CampaignRepository;
#[cfg(test)]
pub use campaign_repository::MockCampaignRepository;
