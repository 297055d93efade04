pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{
    DiscoverCreatorsHandler, DiscoverCreatorsQuery, DiscoverCreatorsResult, Debouncer,
    DiscoverySession, DiscoveryState,
};
pub use domain::{DiscoveryEvaluator, FilterCatalog, FilterCategory, FilterSelection};
