use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::mapper::BrandMapper;
use crate::log_debug;
use crate::modules::brand::domain::{Brand, BrandRepository};
use crate::modules::brand::infrastructure::models::{BrandRow, BRAND_COLUMNS};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::supabase::{SupabaseClient, TableQuery};

const TABLE: &str = "brands";

/// `BrandRepository` backed by the hosted `brands` table
pub struct SupabaseBrandRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseBrandRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BrandRepository for SupabaseBrandRepository {
    async fn get_all(&self) -> AppResult<Vec<Brand>> {
        let query = TableQuery::new().select(BRAND_COLUMNS).order("name", true);
        let rows: Vec<BrandRow> = self.client.select(TABLE, &query).await?;

        log_debug!("Loaded {} brands", rows.len());
        Ok(rows.into_iter().map(BrandMapper::to_domain).collect())
    }

    async fn find_by_owner(&self, owner_id: &Uuid) -> AppResult<Vec<Brand>> {
        let query = TableQuery::new()
            .select(BRAND_COLUMNS)
            .eq("owner_id", owner_id)
            .order("name", true);
        let rows: Vec<BrandRow> = self.client.select(TABLE, &query).await?;

        log_debug!("User {} owns {} brand(s)", owner_id, rows.len());
        Ok(rows.into_iter().map(BrandMapper::to_domain).collect())
    }
}
