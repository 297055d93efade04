use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::creator::domain::entities::creator::Creator;
use crate::shared::errors::AppResult;

/// Port for reading creators from the hosted store
/// Infrastructure provides the implementation; the store's RLS decides visibility
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatorRepository: Send + Sync {
    /// Fetch every visible creator, newest first
    async fn get_all(&self) -> AppResult<Vec<Creator>>;

    /// Find a creator by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Creator>>;
}
