use crate::shared::errors::AppResult;
/// Base trait for query handlers
///
/// Each handler owns exactly one read operation and receives its collaborators
/// (repository ports, domain services) through its constructor.
///
/// # Example
///
/// ```ignore
/// struct DiscoverCreatorsQuery {
///     search_term: String,
///     selection: FilterSelection,
/// }
///
/// struct DiscoverCreatorsHandler {
///     creator_repository: Arc<dyn CreatorRepository>,
///     evaluator: Arc<DiscoveryEvaluator>,
/// }
///
/// #[async_trait]
/// impl Query<DiscoverCreatorsQuery, DiscoverCreatorsResult> for DiscoverCreatorsHandler {
///     async fn execute(&self, query: DiscoverCreatorsQuery) -> AppResult<DiscoverCreatorsResult> {
///         // Fetch, then evaluate
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
