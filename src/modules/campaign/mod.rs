pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CampaignService;
pub use domain::{
    AddCreatorOutcome, Campaign, CampaignCreator, CampaignRepository, CampaignStatus,
    CampaignUpdate, NewCampaign,
};
pub use infrastructure::SupabaseCampaignRepository;
