pub mod service;

pub use service::CampaignService;
