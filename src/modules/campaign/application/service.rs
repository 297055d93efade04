use super::super::domain::{
    AddCreatorOutcome, Campaign, CampaignCreator, CampaignRepository, CampaignUpdate, NewCampaign,
};
use crate::modules::creator::domain::CreatorRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_error, log_info, log_warn};
use std::sync::Arc;
use uuid::Uuid;

pub struct CampaignService {
    campaign_repo: Arc<dyn CampaignRepository>,
    creator_repo: Arc<dyn CreatorRepository>,
}

impl CampaignService {
    pub fn new(
        campaign_repo: Arc<dyn CampaignRepository>,
        creator_repo: Arc<dyn CreatorRepository>,
    ) -> Self {
        Self {
            campaign_repo,
            creator_repo,
        }
    }

    pub async fn create_campaign(&self, campaign: NewCampaign) -> AppResult<Campaign> {
        Validator::validate_brand_id(&campaign.brand_id)?;
        Validator::validate_campaign_name(&campaign.name)?;
        if let Some(budget) = campaign.budget {
            Validator::validate_budget(budget)?;
        }
        if let Some(currency) = &campaign.currency {
            Validator::validate_currency(currency)?;
        }
        Validator::validate_date_range(campaign.start_date, campaign.end_date)?;

        let saved = self.campaign_repo.save(&campaign).await?;
        log_info!("Created campaign '{}' ({})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn get_campaign(&self, id: &Uuid) -> AppResult<Option<Campaign>> {
        self.campaign_repo.find_by_id(id).await
    }

    pub async fn get_all_campaigns(&self) -> AppResult<Vec<Campaign>> {
        self.campaign_repo.get_all().await
    }

    pub async fn update_campaign(&self, id: &Uuid, update: CampaignUpdate) -> AppResult<Campaign> {
        let mut campaign = self
            .campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign with ID {} not found", id)))?;

        if update.is_empty() {
            return Ok(campaign);
        }

        if let Some(name) = &update.name {
            Validator::validate_campaign_name(name)?;
        }
        if let Some(budget) = update.budget {
            Validator::validate_budget(budget)?;
        }
        if let Some(currency) = &update.currency {
            Validator::validate_currency(currency)?;
        }

        // Dates are checked against the merged record so a one-sided change is validated too
        campaign.apply(&update);
        Validator::validate_date_range(campaign.start_date, campaign.end_date)?;

        self.campaign_repo.update(id, &update).await
    }

    pub async fn delete_campaign(&self, id: &Uuid) -> AppResult<()> {
        let _campaign = self
            .campaign_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign with ID {} not found", id)))?;

        // RLS can let a row be read but not deleted; PostgREST then reports zero rows
        if !self.campaign_repo.delete(id).await? {
            log_warn!("Campaign {} is visible but was not deleted", id);
            return Err(AppError::NotFound(format!(
                "Campaign with ID {} could not be deleted",
                id
            )));
        }
        log_info!("Deleted campaign {}", id);

        Ok(())
    }

    /// Attach a creator to a campaign, at most once per pair
    ///
    /// There is no read-before-write: the store's uniqueness constraint is the
    /// single source of truth, and its conflict becomes `AlreadyAdded`.
    pub async fn add_creator_to_campaign(
        &self,
        campaign_id: &Uuid,
        creator_id: &Uuid,
    ) -> AppResult<AddCreatorOutcome> {
        log_debug!("Adding creator {} to campaign {}", creator_id, campaign_id);

        match self.campaign_repo.add_creator(campaign_id, creator_id).await {
            Ok(entry) => {
                log_info!(
                    "Successfully added creator {} to campaign {}",
                    creator_id,
                    campaign_id
                );
                Ok(AddCreatorOutcome::Added(entry))
            }
            Err(AppError::Conflict(_)) => {
                log_info!(
                    "Creator {} is already in campaign {}",
                    creator_id,
                    campaign_id
                );
                Ok(AddCreatorOutcome::AlreadyAdded)
            }
            Err(e) => {
                log_error!(
                    "Failed to add creator {} to campaign {}: {}",
                    creator_id,
                    campaign_id,
                    e
                );
                Err(e)
            }
        }
    }

    pub async fn remove_creator_from_campaign(&self, entry_id: &Uuid) -> AppResult<()> {
        if !self.campaign_repo.remove_creator(entry_id).await? {
            return Err(AppError::NotFound(format!(
                "Campaign entry with ID {} not found",
                entry_id
            )));
        }
        log_info!("Removed campaign entry {}", entry_id);
        Ok(())
    }

    pub async fn get_campaign_creators(&self, campaign_id: &Uuid) -> AppResult<Vec<CampaignCreator>> {
        self.campaign_repo.get_campaign_creators(campaign_id).await
    }

    /// Campaign entries joined with their creator records; entries whose creator
    /// is no longer visible are skipped
    pub async fn get_campaign_roster(
        &self,
        campaign_id: &Uuid,
    ) -> AppResult<Vec<(CampaignCreator, crate::modules::creator::domain::Creator)>> {
        let entries = self.campaign_repo.get_campaign_creators(campaign_id).await?;
        let mut roster = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.creator_repo.find_by_id(&entry.creator_id).await? {
                Some(creator) => roster.push((entry, creator)),
                None => log_debug!(
                    "Creator {} in campaign {} is not visible, skipping",
                    entry.creator_id,
                    campaign_id
                ),
            }
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::campaign::domain::repositories::MockCampaignRepository;
    use crate::modules::campaign::domain::CampaignStatus;
    use crate::modules::creator::domain::repositories::MockCreatorRepository;
    use crate::modules::creator::domain::Creator;
    use chrono::NaiveDate;

    fn stored(new: &NewCampaign) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            brand_id: Some(new.brand_id),
            brand_name: None,
            name: new.name.clone(),
            brief: new.brief.clone(),
            budget: new.budget,
            currency: new.currency.clone(),
            start_date: new.start_date,
            end_date: new.end_date,
            status: CampaignStatus::Draft,
            created_at: None,
            updated_at: None,
        }
    }

    fn entry(campaign_id: Uuid, creator_id: Uuid) -> CampaignCreator {
        CampaignCreator {
            id: Uuid::new_v4(),
            campaign_id,
            creator_id,
            status: CampaignStatus::Draft,
            quoted_fee: None,
            created_at: None,
        }
    }

    fn service(campaigns: MockCampaignRepository, creators: MockCreatorRepository) -> CampaignService {
        CampaignService::new(Arc::new(campaigns), Arc::new(creators))
    }

    #[tokio::test]
    async fn test_add_creator_reports_added_entry() {
        let campaign_id = Uuid::new_v4();
        let creator_id = Uuid::new_v4();
        let expected = entry(campaign_id, creator_id);
        let returned = expected.clone();

        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_add_creator()
            .times(1)
            .returning(move |_, _| Ok(returned.clone()));

        let outcome = service(campaigns, MockCreatorRepository::new())
            .add_creator_to_campaign(&campaign_id, &creator_id)
            .await
            .unwrap();

        assert_eq!(outcome, AddCreatorOutcome::Added(expected));
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_already_added() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_add_creator().times(1).returning(|_, _| {
            Err(AppError::Conflict(
                "duplicate key value violates unique constraint".to_string(),
            ))
        });

        let outcome = service(campaigns, MockCreatorRepository::new())
            .add_creator_to_campaign(&Uuid::new_v4(), &Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(outcome, AddCreatorOutcome::AlreadyAdded);
        assert!(!outcome.was_added());
    }

    #[tokio::test]
    async fn test_other_write_errors_surface_without_retry() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_add_creator()
            .times(1)
            .returning(|_, _| Err(AppError::ExternalServiceError("503".to_string())));

        let result = service(campaigns, MockCreatorRepository::new())
            .add_creator_to_campaign(&Uuid::new_v4(), &Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_create_campaign_validates_before_saving() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_save().never();

        let service = service(campaigns, MockCreatorRepository::new());

        let brand_id = Uuid::new_v4();

        let bad_currency = NewCampaign::new(brand_id, "Launch").with_budget(100.0, "usd");
        assert!(matches!(
            service.create_campaign(bad_currency).await,
            Err(AppError::ValidationError(_))
        ));

        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let bad_dates = NewCampaign::new(brand_id, "Launch").with_dates(start, end);
        assert!(service.create_campaign(bad_dates).await.is_err());
    }

    #[tokio::test]
    async fn test_create_campaign_without_brand_never_reaches_store() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_save().never();

        let result = service(campaigns, MockCreatorRepository::new())
            .create_campaign(NewCampaign::new(Uuid::nil(), "Summer"))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("brand")));
    }

    #[tokio::test]
    async fn test_create_campaign_saves_draft() {
        let brand_id = Uuid::new_v4();
        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_save()
            .withf(move |new| new.brand_id == brand_id)
            .times(1)
            .returning(|new| Ok(stored(new)));

        let created = service(campaigns, MockCreatorRepository::new())
            .create_campaign(NewCampaign::new(brand_id, "Back to School").with_budget(1500.0, "EUR"))
            .await
            .unwrap();

        assert_eq!(created.brand_id, Some(brand_id));
        assert_eq!(created.status, CampaignStatus::Draft);
        assert_eq!(created.currency.as_deref(), Some("EUR"));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_campaign() {
        let mut campaigns = MockCampaignRepository::new();
        campaigns.expect_find_by_id().returning(|_| Ok(None));
        campaigns.expect_update().never();
        campaigns.expect_delete().never();

        let service = service(campaigns, MockCreatorRepository::new());
        let id = Uuid::new_v4();

        let update = CampaignUpdate {
            name: Some("Renamed".to_string()),
            ..CampaignUpdate::default()
        };
        assert!(matches!(
            service.update_campaign(&id, update).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_campaign(&id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_the_store_kept() {
        let existing = stored(&NewCampaign::new(Uuid::new_v4(), "Locked"));

        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        // Readable under RLS but not deletable: zero rows removed
        campaigns.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(campaigns, MockCreatorRepository::new())
            .delete_campaign(&Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.contains("could not be deleted")));
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_row_removed() {
        let existing = stored(&NewCampaign::new(Uuid::new_v4(), "Wrap Up"));

        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        campaigns.expect_delete().times(1).returning(|_| Ok(true));

        let result = service(campaigns, MockCreatorRepository::new())
            .delete_campaign(&Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_checks_dates_against_stored_record() {
        let existing = Campaign {
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            ..stored(&NewCampaign::new(Uuid::new_v4(), "Summer"))
        };

        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        campaigns.expect_update().never();

        let update = CampaignUpdate {
            end_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..CampaignUpdate::default()
        };
        let result = service(campaigns, MockCreatorRepository::new())
            .update_campaign(&Uuid::new_v4(), update)
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_roster_skips_invisible_creators() {
        let campaign_id = Uuid::new_v4();
        let visible = Creator::new("Sarah Chen");
        let visible_id = visible.id;
        let entries = vec![entry(campaign_id, visible_id), entry(campaign_id, Uuid::new_v4())];

        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_get_campaign_creators()
            .returning(move |_| Ok(entries.clone()));

        let mut creators = MockCreatorRepository::new();
        creators.expect_find_by_id().returning(move |id| {
            Ok(if *id == visible_id {
                Some(visible.clone())
            } else {
                None
            })
        });

        let roster = service(campaigns, creators)
            .get_campaign_roster(&campaign_id)
            .await
            .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].1.display_name, "Sarah Chen");
    }
}
