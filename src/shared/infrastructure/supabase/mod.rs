pub mod client;
pub mod error;
pub mod query;
pub mod retry;

pub use client::SupabaseClient;
pub use error::{map_error_response, PostgrestErrorBody, UNIQUE_VIOLATION};
pub use query::TableQuery;
pub use retry::{RetryConfig, RetryUtil};
