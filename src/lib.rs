pub mod modules;
pub mod shared;

use modules::{
    brand::{BrandRepository, BrandService, SupabaseBrandRepository},
    campaign::{
        application::CampaignService, infrastructure::SupabaseCampaignRepository,
        CampaignRepository,
    },
    creator::{infrastructure::SupabaseCreatorRepository, CreatorRepository},
    discovery::{DiscoverCreatorsHandler, DiscoveryEvaluator, DiscoverySession},
};
use shared::{utils::init_logger, AppConfig, AppResult, SupabaseClient};
use std::sync::Arc;

/// Wired services for the dashboard core
///
/// Everything is behind `Arc` so the state can be cloned into request
/// handlers or background tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub supabase: Arc<SupabaseClient>,
    pub brand_repository: Arc<dyn BrandRepository>,
    pub creator_repository: Arc<dyn CreatorRepository>,
    pub campaign_repository: Arc<dyn CampaignRepository>,
    pub brand_service: Arc<BrandService>,
    pub campaign_service: Arc<CampaignService>,
    pub evaluator: Arc<DiscoveryEvaluator>,
    pub discover_creators: Arc<DiscoverCreatorsHandler>,
}

impl AppState {
    /// Initialize logging, read configuration from the environment and wire services
    pub fn initialize() -> AppResult<Self> {
        init_logger();

        let config = AppConfig::from_env().map_err(|e| {
            log::error!("Failed to load configuration: {}", e);
            e
        })?;

        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let supabase = Arc::new(SupabaseClient::new(&config.supabase)?);

        let brand_repository: Arc<dyn BrandRepository> =
            Arc::new(SupabaseBrandRepository::new(Arc::clone(&supabase)));
        let creator_repository: Arc<dyn CreatorRepository> =
            Arc::new(SupabaseCreatorRepository::new(Arc::clone(&supabase)));
        let campaign_repository: Arc<dyn CampaignRepository> =
            Arc::new(SupabaseCampaignRepository::new(Arc::clone(&supabase)));

        Ok(Self::from_parts(
            config,
            supabase,
            brand_repository,
            creator_repository,
            campaign_repository,
        ))
    }

    /// Wire services over the given repositories
    pub fn from_parts(
        config: AppConfig,
        supabase: Arc<SupabaseClient>,
        brand_repository: Arc<dyn BrandRepository>,
        creator_repository: Arc<dyn CreatorRepository>,
        campaign_repository: Arc<dyn CampaignRepository>,
    ) -> Self {
        let evaluator = Arc::new(DiscoveryEvaluator::default());

        let brand_service = Arc::new(BrandService::new(Arc::clone(&brand_repository)));

        let campaign_service = Arc::new(CampaignService::new(
            Arc::clone(&campaign_repository),
            Arc::clone(&creator_repository),
        ));

        let discover_creators = Arc::new(DiscoverCreatorsHandler::new(
            Arc::clone(&creator_repository),
            Arc::clone(&evaluator),
        ));

        log::info!(
            "Influencer Flow core initialized against {}",
            config.supabase.url
        );

        Self {
            config: Arc::new(config),
            supabase,
            brand_repository,
            creator_repository,
            campaign_repository,
            brand_service,
            campaign_service,
            evaluator,
            discover_creators,
        }
    }

    /// New interactive discovery session using the configured debounce window
    pub fn discovery_session(&self) -> DiscoverySession {
        DiscoverySession::new(
            Arc::clone(&self.evaluator),
            self.config.discovery.debounce_window,
        )
    }
}
