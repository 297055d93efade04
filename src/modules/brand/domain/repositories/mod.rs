pub mod brand_repository;

pub use brand_repository::BrandRepository;
#[cfg(test)]
pub use brand_repository::MockBrandRepository;
