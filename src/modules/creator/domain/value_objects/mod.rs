//! Creator value objects

pub mod creator_stats;
pub mod metric;
pub mod platform;

pub use creator_stats::{string_list, CreatorStats, PlatformStats};
pub use metric::{count_from_value, decimal_from_value, parse_quantity};
pub use platform::Platform;
