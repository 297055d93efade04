pub mod campaign;
pub mod campaign_creator;

pub use campaign::{Campaign, CampaignUpdate, NewCampaign};
pub use campaign_creator::{AddCreatorOutcome, CampaignCreator};
