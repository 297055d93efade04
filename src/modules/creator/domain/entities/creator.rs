use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::creator::domain::value_objects::{CreatorStats, Platform};

/// A content-producing profile tracked by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: Uuid,
    pub display_name: String,
    pub bio: Option<String>,
    /// Instagram account id column; used as a handle when stats carry none
    pub ig_id: Option<String>,
    /// YouTube channel id column; used as a handle when stats carry none
    pub yt_id: Option<String>,
    pub location_country: Option<String>,
    pub primary_language: Option<String>,
    pub languages: Vec<String>,
    pub content_example_urls: Vec<String>,
    pub stats: CreatorStats,
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: Option<Uuid>,
}

impl Creator {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            bio: None,
            ig_id: None,
            yt_id: None,
            location_country: None,
            primary_language: None,
            languages: Vec::new(),
            content_example_urls: Vec::new(),
            stats: CreatorStats::default(),
            created_at: None,
            user_id: None,
        }
    }

    /// Non-empty handle on `platform`, if the creator has one
    pub fn handle(&self, platform: Platform) -> Option<&str> {
        let from_stats = self.stats.platform(platform).and_then(|p| p.handle());
        let from_column = match platform {
            Platform::Instagram => self.ig_id.as_deref(),
            Platform::YouTube => self.yt_id.as_deref(),
            _ => None,
        }
        .map(str::trim)
        .filter(|h| !h.is_empty());

        from_stats.or(from_column)
    }

    /// Every configured handle, one per platform
    pub fn handles(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(move |platform| self.handle(platform).map(|h| (platform, h)))
    }

    /// Spoken languages plus the primary language when it is not already listed
    pub fn spoken_languages(&self) -> impl Iterator<Item = &str> + '_ {
        let primary = self
            .primary_language
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter(|p| !self.languages.iter().any(|l| l.eq_ignore_ascii_case(p)));

        self.languages.iter().map(String::as_str).chain(primary)
    }

    pub fn primary_niches(&self) -> &[String] {
        &self.stats.primary_niches
    }

    /// Largest follower-equivalent count across platforms
    pub fn max_follower_count(&self) -> Option<u64> {
        self.stats.max_audience()
    }

    pub fn avg_engagement_rate(&self) -> Option<f64> {
        self.stats.avg_engagement_rate
    }

    pub fn profile_picture_url(&self) -> Option<&str> {
        self.stats.profile_picture_url.as_deref()
    }
}
