pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{BrandSelection, BrandService};
pub use domain::{Brand, BrandRepository};
pub use infrastructure::SupabaseBrandRepository;
