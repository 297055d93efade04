pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{AddCreatorOutcome, Campaign, CampaignCreator, CampaignUpdate, NewCampaign};
pub use repositories::CampaignRepository;
pub use value_objects::CampaignStatus;
