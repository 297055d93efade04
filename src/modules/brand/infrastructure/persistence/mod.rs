pub mod brand_repository_impl;
pub mod mapper;

pub use brand_repository_impl::SupabaseBrandRepository;
pub use mapper::BrandMapper;
