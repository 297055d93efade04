use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::brand::domain::entities::brand::Brand;
use crate::shared::errors::AppResult;

/// Port for reading brands from the hosted store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Every brand visible to the caller, by name
    async fn get_all(&self) -> AppResult<Vec<Brand>>;

    /// Brands owned by the given user, by name
    async fn find_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<Brand>>;
}
