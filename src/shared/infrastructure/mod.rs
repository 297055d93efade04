/// Shared infrastructure concerns
///
/// Infrastructure that is shared across modules. The only backing store is the
/// hosted REST API, so this is where its client lives.
pub mod supabase;

// Re-exports for convenience
pub use supabase::{SupabaseClient, TableQuery};
