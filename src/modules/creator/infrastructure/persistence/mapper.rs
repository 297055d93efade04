/// Conversion between `creators` rows and the domain entity
use serde_json::Value;

use crate::modules::creator::domain::{
    entities::Creator,
    value_objects::{string_list, CreatorStats},
};
use crate::modules::creator::infrastructure::models::CreatorRow;

pub struct CreatorMapper;

impl CreatorMapper {
    pub fn to_domain(row: CreatorRow) -> Creator {
        Creator {
            id: row.id,
            display_name: row.display_name,
            bio: non_blank(row.bio),
            ig_id: non_blank(row.ig_id),
            yt_id: non_blank(row.yt_id),
            location_country: non_blank(row.location_country),
            primary_language: non_blank(row.primary_language),
            languages: row.languages.as_ref().map(string_list).unwrap_or_default(),
            content_example_urls: row
                .content_example_urls
                .as_ref()
                .map(string_list)
                .unwrap_or_default(),
            stats: row
                .stats
                .as_ref()
                .map(CreatorStats::from_value)
                .unwrap_or_default(),
            created_at: row.created_at,
            user_id: row.user_id,
        }
    }

    /// Decode rows one by one so a single malformed record does not sink the batch
    pub fn rows_to_domain(rows: Vec<Value>) -> (Vec<Creator>, usize) {
        let mut skipped = 0;
        let creators = rows
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<CreatorRow>(raw) {
                Ok(row) => Some(Self::to_domain(row)),
                Err(e) => {
                    log::warn!("Skipping malformed creator row: {}", e);
                    skipped += 1;
                    None
                }
            })
            .collect();
        (creators, skipped)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::creator::domain::value_objects::Platform;
    use serde_json::json;

    #[test]
    fn test_maps_full_row() {
        let rows = vec![json!({
            "id": "6f1c5a38-8c1f-4c0e-9f57-0b4f8f0d9a11",
            "display_name": "Sarah Chen",
            "ig_id": "sarahchen",
            "yt_id": null,
            "bio": "Sustainable fashion and thrift hauls",
            "location_country": "US",
            "primary_language": "en",
            "content_example_urls": ["https://instagram.com/p/abc"],
            "languages": ["en", "zh"],
            "stats": {
                "instagram": {"followers": 245000, "posts": 1240},
                "primary_niches": ["Fashion"],
                "avg_engagement_rate": 4.2
            },
            "created_at": "2025-05-31T17:40:00.123456+00:00",
            "user_id": "0b0f2f1e-3c59-4a43-9d3b-8f9a1c0e4d21"
        })];

        let (creators, skipped) = CreatorMapper::rows_to_domain(rows);
        assert_eq!(skipped, 0);
        let creator = &creators[0];
        assert_eq!(creator.display_name, "Sarah Chen");
        assert_eq!(creator.handle(Platform::Instagram), Some("sarahchen"));
        assert_eq!(creator.languages, vec!["en", "zh"]);
        assert_eq!(creator.max_follower_count(), Some(245_000));
        assert_eq!(creator.primary_niches(), ["Fashion".to_string()]);
        assert!(creator.created_at.is_some());
    }

    #[test]
    fn test_sparse_row_and_malformed_row() {
        let rows = vec![
            json!({
                "id": "6f1c5a38-8c1f-4c0e-9f57-0b4f8f0d9a12",
                "display_name": "Quiet Creator",
                "languages": null,
                "stats": null
            }),
            json!({"id": "not-a-uuid", "display_name": "Broken"}),
        ];

        let (creators, skipped) = CreatorMapper::rows_to_domain(rows);
        assert_eq!(skipped, 1);
        assert_eq!(creators.len(), 1);
        assert!(creators[0].languages.is_empty());
        assert_eq!(creators[0].stats, CreatorStats::default());
    }
}
