pub mod debounce;
pub mod session;
pub mod use_cases;

pub use debounce::Debouncer;
pub use session::{DiscoverySession, DiscoveryState};
pub use use_cases::{DiscoverCreatorsHandler, DiscoverCreatorsQuery, DiscoverCreatorsResult};
