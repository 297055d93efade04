/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use influencer_flow_lib::modules::campaign::NewCampaign;
use influencer_flow_lib::modules::creator::{Creator, Platform, PlatformStats};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct CreatorFactory {
    creator: Creator,
}

impl Default for CreatorFactory {
    fn default() -> Self {
        Self {
            creator: Creator::new("Test Creator"),
        }
    }
}

impl CreatorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self::default().with_name(name)
    }

    /// Instagram fashion creator with every field populated
    pub fn complete() -> Self {
        Self::named("Sarah Chen")
            .with_bio("Sustainable fashion and slow living from Vancouver")
            .with_followers(Platform::Instagram, "@sarahstyle", 245_000)
            .with_subscribers(Platform::YouTube, "sarahchen", 82_000)
            .with_niches(&["Fashion", "Lifestyle"])
            .with_languages(&["en", "fr"])
            .with_primary_language("en")
            .with_engagement(4.2)
            .with_country("CA")
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.creator.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.creator.display_name = name.to_string();
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.creator.bio = Some(bio.to_string());
        self
    }

    pub fn with_handle(mut self, platform: Platform, handle: &str) -> Self {
        self.platform(platform).handle = Some(handle.to_string());
        self
    }

    pub fn with_followers(mut self, platform: Platform, handle: &str, followers: u64) -> Self {
        let stats = self.platform(platform);
        stats.handle = Some(handle.to_string());
        stats.followers = Some(followers);
        self
    }

    pub fn with_subscribers(mut self, platform: Platform, handle: &str, subscribers: u64) -> Self {
        let stats = self.platform(platform);
        stats.handle = Some(handle.to_string());
        stats.subscribers = Some(subscribers);
        self
    }

    pub fn with_instagram_column(mut self, ig_id: &str) -> Self {
        self.creator.ig_id = Some(ig_id.to_string());
        self
    }

    pub fn with_niches(mut self, niches: &[&str]) -> Self {
        self.creator.stats.primary_niches = niches.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.creator.languages = languages.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_primary_language(mut self, language: &str) -> Self {
        self.creator.primary_language = Some(language.to_string());
        self
    }

    pub fn with_engagement(mut self, rate: f64) -> Self {
        self.creator.stats.avg_engagement_rate = Some(rate);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.creator.location_country = Some(country.to_string());
        self
    }

    pub fn build(self) -> Creator {
        self.creator
    }

    fn platform(&mut self, platform: Platform) -> &mut PlatformStats {
        self.creator.stats.platforms.entry(platform).or_default()
    }
}

pub struct CampaignFactory {
    campaign: NewCampaign,
}

impl Default for CampaignFactory {
    fn default() -> Self {
        Self {
            campaign: NewCampaign::new(Uuid::new_v4(), "Test Campaign"),
        }
    }
}

impl CampaignFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete() -> Self {
        Self::default()
            .with_name("Summer Glow Launch")
            .with_brief("Sunscreen line launch across Instagram and TikTok")
            .with_budget(15_000.0, "USD")
            .with_dates((2025, 6, 1), (2025, 8, 31))
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.campaign.name = name.to_string();
        self
    }

    pub fn with_brand(mut self, brand_id: Uuid) -> Self {
        self.campaign.brand_id = brand_id;
        self
    }

    pub fn without_brand(self) -> Self {
        self.with_brand(Uuid::nil())
    }

    pub fn with_brief(mut self, brief: &str) -> Self {
        self.campaign.brief = Some(brief.to_string());
        self
    }

    pub fn with_budget(mut self, budget: f64, currency: &str) -> Self {
        self.campaign.budget = Some(budget);
        self.campaign.currency = Some(currency.to_string());
        self
    }

    pub fn with_dates(mut self, start: (i32, u32, u32), end: (i32, u32, u32)) -> Self {
        self.campaign.start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2);
        self.campaign.end_date = NaiveDate::from_ymd_opt(end.0, end.1, end.2);
        self
    }

    pub fn build(self) -> NewCampaign {
        self.campaign
    }
}
