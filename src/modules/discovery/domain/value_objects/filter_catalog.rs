use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Filter dimensions shown on the discovery screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    Platform,
    Category,
    Language,
    Followers,
    Engagement,
}

impl FilterCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterCategory::Platform => "Platform",
            FilterCategory::Category => "Category",
            FilterCategory::Language => "Language",
            FilterCategory::Followers => "Followers",
            FilterCategory::Engagement => "Engagement",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub category: FilterCategory,
    pub options: Vec<String>,
}

impl FilterGroup {
    pub fn new(category: FilterCategory, options: &[&str]) -> Self {
        Self {
            category,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Selected options re-grouped by category, categories in catalog order
pub type GroupedSelection<'a> = BTreeMap<FilterCategory, Vec<&'a str>>;

/// Fixed set of filter groups with an option -> category index
///
/// The index is built once at construction; grouping a selection is a
/// lookup per option rather than a scan over every group.
#[derive(Debug, Clone)]
pub struct FilterCatalog {
    groups: Vec<FilterGroup>,
    index: HashMap<String, FilterCategory>,
}

static STANDARD: OnceLock<Arc<FilterCatalog>> = OnceLock::new();

impl FilterCatalog {
    /// Build a catalog; when a label appears in several groups the first one wins
    pub fn new(groups: Vec<FilterGroup>) -> Self {
        let mut index = HashMap::new();
        for group in &groups {
            for option in &group.options {
                index.entry(option.clone()).or_insert(group.category);
            }
        }
        Self { groups, index }
    }

    /// The catalog offered by the discovery screen
    pub fn standard() -> Arc<FilterCatalog> {
        STANDARD
            .get_or_init(|| {
                Arc::new(Self::new(vec![
                    FilterGroup::new(
                        FilterCategory::Platform,
                        &["Instagram", "TikTok", "YouTube", "Twitter"],
                    ),
                    FilterGroup::new(
                        FilterCategory::Category,
                        &["Fashion", "Tech", "Food", "Travel", "Fitness"],
                    ),
                    FilterGroup::new(
                        FilterCategory::Language,
                        &["English", "Spanish", "French", "German"],
                    ),
                    FilterGroup::new(
                        FilterCategory::Followers,
                        &["1K-10K", "10K-100K", "100K-1M", "1M+"],
                    ),
                    FilterGroup::new(
                        FilterCategory::Engagement,
                        &["1-3%", "3-6%", "6-10%", "10%+"],
                    ),
                ]))
            })
            .clone()
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    pub fn category_of(&self, option: &str) -> Option<FilterCategory> {
        self.index.get(option).copied()
    }

    /// Re-group a flat selection by category; unknown options are dropped
    pub fn group<'a, I>(&self, selection: I) -> GroupedSelection<'a>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grouped = GroupedSelection::new();
        for option in selection {
            if let Some(category) = self.category_of(option) {
                grouped.entry(category).or_default().push(option);
            }
        }
        grouped
    }
}
