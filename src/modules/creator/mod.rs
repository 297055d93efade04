pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{Creator, CreatorRepository, CreatorStats, Platform, PlatformStats};
pub use infrastructure::SupabaseCreatorRepository;
