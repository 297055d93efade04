use serde::Serialize;

use crate::modules::creator::domain::Creator;

/// Matching creators in store order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverCreatorsResult {
    pub creators: Vec<Creator>,
    pub total_available: usize,
}

impl DiscoverCreatorsResult {
    pub fn new(creators: Vec<Creator>, total_available: usize) -> Self {
        Self {
            creators,
            total_available,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}
