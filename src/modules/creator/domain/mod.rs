pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Creator;
pub use repositories::CreatorRepository;
pub use value_objects::{CreatorStats, Platform, PlatformStats};
