// Shared Kernel
// Cross-cutting pieces used by every module: errors, config, logging, store client

pub mod application; // Use case / query traits
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Hosted store client
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::{AppConfig, DiscoveryConfig, SupabaseConfig};
pub use errors::{AppError, AppResult};
pub use infrastructure::supabase::SupabaseClient;
