use async_trait::async_trait;
use std::sync::Arc;

use super::{DiscoverCreatorsQuery, DiscoverCreatorsResult};
use crate::modules::creator::domain::CreatorRepository;
use crate::modules::discovery::domain::DiscoveryEvaluator;
use crate::shared::application::Query;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};

/// Handler for one-shot creator discovery
///
/// A failed fetch is returned as-is and nothing is evaluated.
pub struct DiscoverCreatorsHandler {
    creator_repository: Arc<dyn CreatorRepository>,
    evaluator: Arc<DiscoveryEvaluator>,
}

impl DiscoverCreatorsHandler {
    pub fn new(
        creator_repository: Arc<dyn CreatorRepository>,
        evaluator: Arc<DiscoveryEvaluator>,
    ) -> Self {
        Self {
            creator_repository,
            evaluator,
        }
    }
}

#[async_trait]
impl Query<DiscoverCreatorsQuery, DiscoverCreatorsResult> for DiscoverCreatorsHandler {
    async fn execute(&self, query: DiscoverCreatorsQuery) -> AppResult<DiscoverCreatorsResult> {
        let timer = TimedOperation::new("discover_creators");
        LogContext::search_operation(&query.search_term, query.selection.len(), None);

        let creators = self.creator_repository.get_all().await?;
        let matched = self
            .evaluator
            .evaluate(&creators, &query.search_term, &query.selection);

        LogContext::search_operation(
            &query.search_term,
            query.selection.len(),
            Some(matched.len()),
        );
        timer.finish_with_info(&format!("{} of {} creators", matched.len(), creators.len()));

        Ok(DiscoverCreatorsResult::new(matched, creators.len()))
    }
}
