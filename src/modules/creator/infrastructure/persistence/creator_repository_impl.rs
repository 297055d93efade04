use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::mapper::CreatorMapper;
use crate::modules::creator::domain::{entities::Creator, repositories::CreatorRepository};
use crate::modules::creator::infrastructure::models::CREATOR_COLUMNS;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::supabase::{SupabaseClient, TableQuery};
use crate::{log_debug, log_warn};

const TABLE: &str = "creators";

/// `CreatorRepository` backed by the hosted `creators` table
pub struct SupabaseCreatorRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseCreatorRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    fn decode(rows: Vec<Value>) -> Vec<Creator> {
        let (creators, skipped) = CreatorMapper::rows_to_domain(rows);
        if skipped > 0 {
            log_warn!("Skipped {} malformed creator row(s)", skipped);
        }
        creators
    }
}

#[async_trait]
impl CreatorRepository for SupabaseCreatorRepository {
    async fn get_all(&self) -> AppResult<Vec<Creator>> {
        let query = TableQuery::new()
            .select(CREATOR_COLUMNS)
            .order("created_at", false);
        let rows: Vec<Value> = self.client.select(TABLE, &query).await?;

        let creators = Self::decode(rows);
        log_debug!("Loaded {} creators", creators.len());
        Ok(creators)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Creator>> {
        let query = TableQuery::new()
            .select(CREATOR_COLUMNS)
            .eq("id", id)
            .limit(1);
        let rows: Vec<Value> = self.client.select(TABLE, &query).await?;

        Ok(Self::decode(rows).into_iter().next())
    }
}
