pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::Brand;
pub use repositories::BrandRepository;
