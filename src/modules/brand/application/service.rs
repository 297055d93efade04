use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::super::domain::{Brand, BrandRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Brand to use when a user starts a new campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "selection", content = "brands")]
pub enum BrandSelection {
    /// The user owns exactly one brand
    Selected(Brand),
    /// The user owns several brands and has to pick one
    Choose(Vec<Brand>),
}

impl BrandSelection {
    pub fn brand_id(&self) -> Option<Uuid> {
        match self {
            BrandSelection::Selected(brand) => Some(brand.id),
            BrandSelection::Choose(_) => None,
        }
    }
}

pub struct BrandService {
    brand_repo: Arc<dyn BrandRepository>,
}

impl BrandService {
    pub fn new(brand_repo: Arc<dyn BrandRepository>) -> Self {
        Self { brand_repo }
    }

    pub async fn get_all_brands(&self) -> AppResult<Vec<Brand>> {
        self.brand_repo.get_all().await
    }

    pub async fn get_brands_for_owner(&self, owner_id: &Uuid) -> AppResult<Vec<Brand>> {
        self.brand_repo.find_by_owner(owner_id).await
    }

    /// Pick the brand a new campaign is created under
    ///
    /// A single owned brand is selected outright; several are returned for the
    /// caller to choose from. Owning none is an error, since every campaign
    /// must belong to a brand.
    pub async fn select_brand_for_owner(&self, owner_id: &Uuid) -> AppResult<BrandSelection> {
        let mut brands = self.brand_repo.find_by_owner(owner_id).await?;

        match brands.len() {
            0 => {
                log_info!("User {} has no brand to create campaigns under", owner_id);
                Err(AppError::ValidationError(
                    "No brand found for this account; create a brand before creating a campaign"
                        .to_string(),
                ))
            }
            1 => {
                let brand = brands.swap_remove(0);
                log_debug!("Auto-selecting brand '{}' for user {}", brand.name, owner_id);
                Ok(BrandSelection::Selected(brand))
            }
            n => {
                log_debug!("User {} owns {} brands, selection required", owner_id, n);
                Ok(BrandSelection::Choose(brands))
            }
        }
    }
}
