pub mod discover_creators;

pub use discover_creators::{DiscoverCreatorsHandler, DiscoverCreatorsQuery, DiscoverCreatorsResult};
