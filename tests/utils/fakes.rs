/// In-memory repository implementations for integration tests
use async_trait::async_trait;
use chrono::Utc;
use influencer_flow_lib::modules::brand::{Brand, BrandRepository};
use influencer_flow_lib::modules::campaign::{
    Campaign, CampaignCreator, CampaignRepository, CampaignStatus, CampaignUpdate, NewCampaign,
};
use influencer_flow_lib::modules::creator::{Creator, CreatorRepository};
use influencer_flow_lib::shared::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

pub struct InMemoryBrandRepository {
    brands: Vec<Brand>,
}

impl InMemoryBrandRepository {
    pub fn new(brands: Vec<Brand>) -> Self {
        Self { brands }
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn get_all(&self) -> AppResult<Vec<Brand>> {
        let mut brands = self.brands.clone();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }

    async fn find_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<Brand>> {
        let mut brands = self.get_all().await?;
        brands.retain(|b| b.owner_id == *owner_id);
        Ok(brands)
    }
}

pub struct InMemoryCreatorRepository {
    creators: Vec<Creator>,
    fetches: AtomicUsize,
}

impl InMemoryCreatorRepository {
    pub fn new(creators: Vec<Creator>) -> Self {
        Self {
            creators,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CreatorRepository for InMemoryCreatorRepository {
    async fn get_all(&self) -> AppResult<Vec<Creator>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.creators.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Creator>> {
        Ok(self.creators.iter().find(|c| c.id == *id).cloned())
    }
}

/// Every read fails with the configured error
pub struct FailingCreatorRepository {
    error: AppError,
}

impl FailingCreatorRepository {
    pub fn new(error: AppError) -> Self {
        Self { error }
    }

    pub fn unauthorized() -> Self {
        Self::new(AppError::Unauthorized(
            "permission denied for table creators".to_string(),
        ))
    }
}

#[async_trait]
impl CreatorRepository for FailingCreatorRepository {
    async fn get_all(&self) -> AppResult<Vec<Creator>> {
        Err(self.error.clone())
    }

    async fn find_by_id(&self, _id: &Uuid) -> AppResult<Option<Creator>> {
        Err(self.error.clone())
    }
}

/// Campaign store that enforces one entry per (campaign, creator) pair, like
/// the hosted table's unique constraint
#[derive(Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Mutex<Vec<Campaign>>,
    entries: Mutex<Vec<CampaignCreator>>,
    add_attempts: AtomicUsize,
    fail_writes_with: Mutex<Option<AppError>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attempts(&self) -> usize {
        self.add_attempts.load(Ordering::SeqCst)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn fail_writes_with(&self, error: AppError) {
        *self.fail_writes_with.lock().unwrap() = Some(error);
    }

    fn write_failure(&self) -> AppResult<()> {
        match self.fail_writes_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn get_all(&self) -> AppResult<Vec<Campaign>> {
        Ok(self.campaigns.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Campaign>> {
        Ok(self
            .campaigns
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    async fn save(&self, campaign: &NewCampaign) -> AppResult<Campaign> {
        self.write_failure()?;
        let now = Utc::now();
        let stored = Campaign {
            id: Uuid::new_v4(),
            brand_id: Some(campaign.brand_id),
            brand_name: None,
            name: campaign.name.clone(),
            brief: campaign.brief.clone(),
            budget: campaign.budget,
            currency: campaign.currency.clone(),
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            status: CampaignStatus::Draft,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.campaigns.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &Uuid, update: &CampaignUpdate) -> AppResult<Campaign> {
        self.write_failure()?;
        let mut campaigns = self.campaigns.lock().unwrap();
        let campaign = campaigns
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("Campaign with ID {} not found", id)))?;
        campaign.apply(update);
        Ok(campaign.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        self.write_failure()?;
        let mut campaigns = self.campaigns.lock().unwrap();
        let before = campaigns.len();
        campaigns.retain(|c| c.id != *id);
        Ok(campaigns.len() < before)
    }

    async fn add_creator(
        &self,
        campaign_id: &Uuid,
        creator_id: &Uuid,
    ) -> AppResult<CampaignCreator> {
        self.add_attempts.fetch_add(1, Ordering::SeqCst);
        self.write_failure()?;

        let mut entries = self.entries.lock().unwrap();
        if entries
            .iter()
            .any(|e| e.campaign_id == *campaign_id && e.creator_id == *creator_id)
        {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint \"campaign_creators_pkey\""
                    .to_string(),
            ));
        }

        let entry = CampaignCreator {
            id: Uuid::new_v4(),
            campaign_id: *campaign_id,
            creator_id: *creator_id,
            status: CampaignStatus::Draft,
            quoted_fee: None,
            created_at: Some(Utc::now()),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn remove_creator(&self, entry_id: &Uuid) -> AppResult<bool> {
        self.write_failure()?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != *entry_id);
        Ok(entries.len() < before)
    }

    async fn get_campaign_creators(&self, campaign_id: &Uuid) -> AppResult<Vec<CampaignCreator>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.campaign_id == *campaign_id)
            .cloned()
            .collect())
    }
}
