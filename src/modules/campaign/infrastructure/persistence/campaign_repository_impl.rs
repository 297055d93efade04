use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::mapper::CampaignMapper;
use crate::modules::campaign::domain::{
    Campaign, CampaignCreator, CampaignRepository, CampaignUpdate, NewCampaign,
};
use crate::modules::campaign::infrastructure::models::{
    CampaignCreatorRow, CampaignRow, NewCampaignCreatorRow, CAMPAIGN_COLUMNS,
    CAMPAIGN_CREATOR_COLUMNS,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::supabase::{SupabaseClient, TableQuery};
use crate::log_debug;

const CAMPAIGNS: &str = "campaigns";
const CAMPAIGN_CREATORS: &str = "campaign_creators";

/// `CampaignRepository` backed by the hosted `campaigns` and `campaign_creators` tables
pub struct SupabaseCampaignRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseCampaignRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    fn by_id(id: &Uuid) -> TableQuery {
        TableQuery::new().eq("id", id)
    }

    fn single<T>(mut rows: Vec<T>, what: &str) -> AppResult<T> {
        if rows.is_empty() {
            return Err(AppError::DatabaseError(format!(
                "Store returned no {} row",
                what
            )));
        }
        Ok(rows.swap_remove(0))
    }
}

#[async_trait]
impl CampaignRepository for SupabaseCampaignRepository {
    async fn get_all(&self) -> AppResult<Vec<Campaign>> {
        let query = TableQuery::new()
            .select(CAMPAIGN_COLUMNS)
            .order("created_at", false);
        let rows: Vec<CampaignRow> = self.client.select(CAMPAIGNS, &query).await?;

        Ok(rows.into_iter().map(CampaignMapper::to_domain).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Campaign>> {
        let query = Self::by_id(id).select(CAMPAIGN_COLUMNS).limit(1);
        let rows: Vec<CampaignRow> = self.client.select(CAMPAIGNS, &query).await?;

        Ok(rows.into_iter().next().map(CampaignMapper::to_domain))
    }

    async fn save(&self, campaign: &NewCampaign) -> AppResult<Campaign> {
        let row = CampaignMapper::to_insert(campaign);
        let rows: Vec<CampaignRow> = self.client.insert(CAMPAIGNS, &row).await?;

        Self::single(rows, "campaign").map(CampaignMapper::to_domain)
    }

    async fn update(&self, id: &Uuid, update: &CampaignUpdate) -> AppResult<Campaign> {
        let changeset = CampaignMapper::to_changeset(update);
        let rows: Vec<CampaignRow> = self
            .client
            .update(CAMPAIGNS, &Self::by_id(id), &changeset)
            .await?;

        match rows.into_iter().next() {
            Some(row) => Ok(CampaignMapper::to_domain(row)),
            None => Err(AppError::NotFound(format!(
                "Campaign with ID {} not found",
                id
            ))),
        }
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let removed = self.client.delete(CAMPAIGNS, &Self::by_id(id)).await?;
        Ok(removed > 0)
    }

    async fn add_creator(
        &self,
        campaign_id: &Uuid,
        creator_id: &Uuid,
    ) -> AppResult<CampaignCreator> {
        let row = NewCampaignCreatorRow {
            campaign_id: *campaign_id,
            creator_id: *creator_id,
        };
        // A duplicate pair comes back as 409 / 23505 and is mapped to Conflict by the client
        let rows: Vec<CampaignCreatorRow> = self.client.insert(CAMPAIGN_CREATORS, &row).await?;

        Self::single(rows, "campaign_creators").map(CampaignMapper::entry_to_domain)
    }

    async fn remove_creator(&self, entry_id: &Uuid) -> AppResult<bool> {
        let removed = self
            .client
            .delete(CAMPAIGN_CREATORS, &Self::by_id(entry_id))
            .await?;
        Ok(removed > 0)
    }

    async fn get_campaign_creators(&self, campaign_id: &Uuid) -> AppResult<Vec<CampaignCreator>> {
        let query = TableQuery::new()
            .select(CAMPAIGN_CREATOR_COLUMNS)
            .eq("campaign_id", campaign_id)
            .order("created_at", true);
        let rows: Vec<CampaignCreatorRow> = self.client.select(CAMPAIGN_CREATORS, &query).await?;

        log_debug!("Campaign {} has {} creator(s)", campaign_id, rows.len());
        Ok(rows.into_iter().map(CampaignMapper::entry_to_domain).collect())
    }
}
