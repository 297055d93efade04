use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::campaign::domain::entities::{
    Campaign, CampaignCreator, CampaignUpdate, NewCampaign,
};
use crate::shared::errors::AppResult;

/// Port for campaign persistence and the campaign/creator association
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Campaign>>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Campaign>>;

    /// Persist a new campaign in draft state and return the stored record
    async fn save(&self, campaign: &NewCampaign) -> AppResult<Campaign>;

    async fn update(&self, id: &Uuid, update: &CampaignUpdate) -> AppResult<Campaign>;

    /// Returns true when a row was removed
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;

    /// Insert the (campaign, creator) pair
    ///
    /// Fails with `AppError::Conflict` when the pair already exists.
    async fn add_creator(&self, campaign_id: &Uuid, creator_id: &Uuid)
        -> AppResult<CampaignCreator>;

    /// Returns true when a row was removed
    async fn remove_creator(&self, entry_id: &Uuid) -> AppResult<bool>;

    async fn get_campaign_creators(&self, campaign_id: &Uuid) -> AppResult<Vec<CampaignCreator>>;
}
