use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::metric::{count_from_value, decimal_from_value};
use super::platform::Platform;

/// Per-platform metrics; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub handle: Option<String>,
    pub followers: Option<u64>,
    pub subscribers: Option<u64>,
    pub posts: Option<u64>,
    pub videos: Option<u64>,
    pub avg_likes: Option<f64>,
    pub avg_comments: Option<f64>,
    pub engagement_rate: Option<f64>,
}

impl PlatformStats {
    /// Audience size on this platform: the larger of followers and subscribers
    pub fn audience(&self) -> Option<u64> {
        self.followers.into_iter().chain(self.subscribers).max()
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            handle: first_string(object, &["handle", "username"]),
            followers: first_count(object, &["followers", "follower_count", "followers_count"]),
            subscribers: first_count(
                object,
                &["subscribers", "subscriber_count", "subscribers_count"],
            ),
            posts: first_count(object, &["posts", "post_count", "media_count"]),
            videos: first_count(object, &["videos", "video_count"]),
            avg_likes: first_decimal(object, &["avg_likes", "avgLikes", "average_likes"]),
            avg_comments: first_decimal(object, &["avg_comments", "avgComments", "average_comments"]),
            engagement_rate: first_decimal(object, &["engagement_rate", "engagementRate"]),
        }
    }
}

/// Typed view over the creator's loosely-structured statistics blob
///
/// Built from arbitrary JSON: unknown keys are ignored and unreadable values
/// become `None`, so a malformed blob degrades to "no data" instead of failing
/// the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct CreatorStats {
    pub platforms: BTreeMap<Platform, PlatformStats>,
    pub profile_picture_url: Option<String>,
    pub primary_niches: Vec<String>,
    pub avg_engagement_rate: Option<f64>,
}

impl CreatorStats {
    pub fn platform(&self, platform: Platform) -> Option<&PlatformStats> {
        self.platforms.get(&platform)
    }

    /// Largest follower-equivalent count across platforms, `None` if no platform has one
    pub fn max_audience(&self) -> Option<u64> {
        self.platforms.values().filter_map(PlatformStats::audience).max()
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let mut platforms = BTreeMap::new();
        for (key, nested) in object {
            if let (Some(platform), Some(stats)) = (Platform::from_label(key), nested.as_object()) {
                platforms.insert(platform, PlatformStats::from_object(stats));
            }
        }

        // Serialized form of this struct nests platforms under "platforms"
        if let Some(nested) = object.get("platforms").and_then(Value::as_object) {
            for (key, stats) in nested {
                if let (Some(platform), Some(stats)) = (Platform::from_label(key), stats.as_object())
                {
                    platforms
                        .entry(platform)
                        .or_insert_with(|| PlatformStats::from_object(stats));
                }
            }
        }

        Self {
            platforms,
            profile_picture_url: first_string(
                object,
                &["profile_picture_url", "profilePictureUrl", "avatar_url"],
            ),
            primary_niches: object
                .get("primary_niches")
                .or_else(|| object.get("primaryNiches"))
                .or_else(|| object.get("niches"))
                .map(string_list)
                .unwrap_or_default(),
            avg_engagement_rate: first_decimal(
                object,
                &[
                    "avg_engagement_rate",
                    "avgEngagementRate",
                    "average_engagement_rate",
                ],
            ),
        }
    }
}

impl From<Value> for CreatorStats {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Strings from an array, a single string, or the keys of an object
pub fn string_list(value: &Value) -> Vec<String> {
    let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(non_empty)
            .collect(),
        Value::String(s) => non_empty(s).into_iter().collect(),
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !matches!(v, Value::Null | Value::Bool(false)))
            .filter_map(|(k, _)| non_empty(k))
            .collect(),
        _ => Vec::new(),
    }
}

fn first_string(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| object.get(*k))
        .filter_map(Value::as_str)
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

fn first_count(object: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .filter_map(|k| object.get(*k))
        .find_map(count_from_value)
}

fn first_decimal(object: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|k| object.get(*k))
        .find_map(decimal_from_value)
}
