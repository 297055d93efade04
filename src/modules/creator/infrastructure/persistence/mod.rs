pub mod creator_repository_impl;
pub mod mapper;

pub use creator_repository_impl::SupabaseCreatorRepository;
pub use mapper::CreatorMapper;
