pub mod services;
pub mod value_objects;

pub use services::DiscoveryEvaluator;
pub use value_objects::{
    FilterCatalog, FilterCategory, FilterGroup, FilterSelection, GroupedSelection, NumericRange,
};
