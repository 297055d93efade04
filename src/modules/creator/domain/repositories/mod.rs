pub mod creator_repository;

pub use creator_repository::CreatorRepository;
#[cfg(test)]
pub use creator_repository::MockCreatorRepository;
