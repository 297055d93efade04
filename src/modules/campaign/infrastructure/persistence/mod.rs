pub mod campaign_repository_impl;
pub mod mapper;

pub use campaign_repository_impl::SupabaseCampaignRepository;
pub use mapper::CampaignMapper;
