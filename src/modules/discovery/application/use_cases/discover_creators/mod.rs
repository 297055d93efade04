mod handler;
mod query;
mod result;

pub use handler::DiscoverCreatorsHandler;
pub use query::DiscoverCreatorsQuery;
pub use result::DiscoverCreatorsResult;
