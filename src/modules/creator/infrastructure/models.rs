use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Columns requested from the `creators` table
pub const CREATOR_COLUMNS: &str = "id, display_name, ig_id, yt_id, bio, location_country, \
     primary_language, content_example_urls, languages, stats, created_at, user_id";

/// Raw `creators` row as returned by the REST layer
///
/// JSON columns stay as `Value`; the mapper decides how to read them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorRow {
    pub id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub ig_id: Option<String>,
    #[serde(default)]
    pub yt_id: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    #[serde(default)]
    pub primary_language: Option<String>,
    #[serde(default)]
    pub content_example_urls: Option<Value>,
    #[serde(default)]
    pub languages: Option<Value>,
    #[serde(default)]
    pub stats: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
