use std::sync::Arc;

use crate::modules::creator::domain::{Creator, Platform};
use crate::modules::discovery::domain::value_objects::{
    normalize_language, FilterCatalog, FilterCategory, FilterSelection, NumericRange,
};

/// Creator search and filter evaluation
///
/// `evaluate` is a stable, pure filter: it returns clones of the matching
/// creators in input order and never touches the input slice.
#[derive(Debug, Clone)]
pub struct DiscoveryEvaluator {
    catalog: Arc<FilterCatalog>,
}

/// One category's selected options, compiled for matching
#[derive(Debug)]
enum Constraint {
    Platforms(Vec<Platform>),
    Niches(Vec<String>),
    Languages(Vec<String>),
    Followers(Vec<NumericRange>),
    Engagement(Vec<NumericRange>),
}

impl Default for DiscoveryEvaluator {
    fn default() -> Self {
        Self::new(FilterCatalog::standard())
    }
}

impl DiscoveryEvaluator {
    pub fn new(catalog: Arc<FilterCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    pub fn evaluate(
        &self,
        creators: &[Creator],
        query: &str,
        selection: &FilterSelection,
    ) -> Vec<Creator> {
        let needle = query.to_lowercase();
        let constraints = self.compile(selection);

        creators
            .iter()
            .filter(|creator| needle.is_empty() || matches_text(creator, &needle))
            .filter(|creator| constraints.iter().all(|c| c.matches(creator)))
            .cloned()
            .collect()
    }

    fn compile(&self, selection: &FilterSelection) -> Vec<Constraint> {
        self.catalog
            .group(selection.iter())
            .into_iter()
            .map(|(category, options)| Constraint::compile(category, &options))
            .collect()
    }
}

impl Constraint {
    fn compile(category: FilterCategory, options: &[&str]) -> Self {
        // An option that cannot be read stays selected but can never match
        let ranges = || {
            options
                .iter()
                .filter_map(|o| NumericRange::parse(o))
                .collect::<Vec<_>>()
        };

        match category {
            FilterCategory::Platform => Constraint::Platforms(
                options.iter().filter_map(|o| Platform::from_label(o)).collect(),
            ),
            FilterCategory::Category => {
                Constraint::Niches(options.iter().map(|o| o.to_lowercase()).collect())
            }
            FilterCategory::Language => {
                Constraint::Languages(options.iter().map(|o| normalize_language(o)).collect())
            }
            FilterCategory::Followers => Constraint::Followers(ranges()),
            FilterCategory::Engagement => Constraint::Engagement(ranges()),
        }
    }

    fn matches(&self, creator: &Creator) -> bool {
        match self {
            Constraint::Platforms(platforms) => {
                platforms.iter().any(|p| creator.handle(*p).is_some())
            }
            Constraint::Niches(niches) => creator
                .primary_niches()
                .iter()
                .map(|n| n.to_lowercase())
                .any(|n| niches.contains(&n)),
            Constraint::Languages(codes) => creator
                .spoken_languages()
                .map(normalize_language)
                .any(|l| codes.contains(&l)),
            Constraint::Followers(ranges) => match creator.max_follower_count() {
                Some(count) => ranges.iter().any(|r| r.contains(count as f64)),
                None => false,
            },
            Constraint::Engagement(ranges) => match creator.avg_engagement_rate() {
                Some(rate) => ranges.iter().any(|r| r.contains(rate)),
                None => false,
            },
        }
    }
}

/// `needle` must already be lower-cased
fn matches_text(creator: &Creator, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&creator.display_name)
        || creator.bio.as_deref().is_some_and(contains)
        || contains(&creator.primary_niches().join(" "))
        || creator.handles().any(|(_, handle)| contains(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::creator::domain::PlatformStats;

    fn creator(name: &str) -> Creator {
        Creator::new(name)
    }

    fn with_followers(name: &str, followers: u64) -> Creator {
        let mut c = creator(name);
        c.stats.platforms.insert(
            Platform::Instagram,
            PlatformStats {
                handle: Some(format!("@{}", name.to_lowercase())),
                followers: Some(followers),
                ..PlatformStats::default()
            },
        );
        c
    }

    fn select(options: &[&str]) -> FilterSelection {
        options.iter().copied().collect()
    }

    fn names(creators: &[Creator]) -> Vec<&str> {
        creators.iter().map(|c| c.display_name.as_str()).collect()
    }

    #[test]
    fn test_text_matches_bio_and_handles() {
        let mut chef = creator("Sarah");
        chef.bio = Some("Home cook sharing Weeknight recipes".to_string());
        let mut gamer = creator("Alex");
        gamer.yt_id = Some("PixelQuest".to_string());
        let plain = creator("Jordan");

        let evaluator = DiscoveryEvaluator::default();
        let all = vec![chef, gamer, plain];

        assert_eq!(names(&evaluator.evaluate(&all, "WEEKNIGHT", &select(&[]))), vec!["Sarah"]);
        assert_eq!(names(&evaluator.evaluate(&all, "pixel", &select(&[]))), vec!["Alex"]);
    }

    #[test]
    fn test_query_is_matched_literally() {
        let evaluator = DiscoveryEvaluator::default();
        let all = vec![creator("Sarah Chen")];

        assert_eq!(evaluator.evaluate(&all, "sarah chen", &select(&[])).len(), 1);
        assert!(evaluator.evaluate(&all, " sarah", &select(&[])).is_empty());
    }

    #[test]
    fn test_followers_ranges() {
        let evaluator = DiscoveryEvaluator::default();
        let all = vec![
            with_followers("Mid", 50_000),
            with_followers("Huge", 5_000_000),
            with_followers("Edge", 10_000),
        ];

        assert_eq!(
            names(&evaluator.evaluate(&all, "", &select(&["10K-100K"]))),
            vec!["Mid", "Edge"]
        );
        assert_eq!(
            names(&evaluator.evaluate(&all, "", &select(&["1K-10K", "1M+"]))),
            vec!["Huge", "Edge"]
        );
    }

    #[test]
    fn test_unreadable_range_in_custom_catalog_never_matches() {
        use crate::modules::discovery::domain::value_objects::FilterGroup;

        let catalog = FilterCatalog::new(vec![FilterGroup::new(
            FilterCategory::Followers,
            &["lots", "10K-100K"],
        )]);
        let evaluator = DiscoveryEvaluator::new(Arc::new(catalog));
        let all = vec![with_followers("Mid", 50_000)];

        assert!(evaluator.evaluate(&all, "", &select(&["lots"])).is_empty());
        assert_eq!(evaluator.evaluate(&all, "", &select(&["lots", "10K-100K"])).len(), 1);
    }

    #[test]
    fn test_only_unknown_options_impose_nothing() {
        let evaluator = DiscoveryEvaluator::default();
        let all = vec![creator("A"), creator("B")];
        assert_eq!(evaluator.evaluate(&all, "", &select(&["Podcasting"])), all);
    }

    #[test]
    fn test_input_is_untouched() {
        let evaluator = DiscoveryEvaluator::default();
        let all = vec![with_followers("Mid", 50_000), creator("None")];
        let before = all.clone();

        let _ = evaluator.evaluate(&all, "mid", &select(&["Instagram", "1M+"]));
        assert_eq!(all, before);
    }
}
