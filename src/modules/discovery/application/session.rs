use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use super::debounce::Debouncer;
use crate::modules::creator::domain::{Creator, CreatorRepository};
use crate::modules::discovery::domain::{DiscoveryEvaluator, FilterSelection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::log_debug;

/// What the discovery screen should currently show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum DiscoveryState {
    Loading,
    Ready(Vec<Creator>),
    Failed(String),
}

impl DiscoveryState {
    pub fn creators(&self) -> Option<&[Creator]> {
        match self {
            DiscoveryState::Ready(creators) => Some(creators),
            _ => None,
        }
    }
}

enum Source {
    Loading,
    Loaded(Vec<Creator>),
    Failed(AppError),
}

struct SessionData {
    source: Source,
    query: String,
    selection: FilterSelection,
}

struct SessionInner {
    evaluator: Arc<DiscoveryEvaluator>,
    data: Mutex<SessionData>,
    state: watch::Sender<DiscoveryState>,
    evaluations: AtomicUsize,
}

impl SessionInner {
    fn lock(&self) -> MutexGuard<'_, SessionData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_query(&self, query: String) {
        let mut data = self.lock();
        data.query = query;
        self.refresh(&data);
    }

    // Recomputes from the full list; does nothing until creators are loaded
    fn refresh(&self, data: &SessionData) {
        let Source::Loaded(creators) = &data.source else {
            return;
        };

        LogContext::search_operation(&data.query, data.selection.len(), None);
        let matched = self
            .evaluator
            .evaluate(creators, &data.query, &data.selection);
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        LogContext::search_operation(&data.query, data.selection.len(), Some(matched.len()));

        self.state.send_replace(DiscoveryState::Ready(matched));
    }
}

/// Interactive discovery state: the loaded creator list, the applied query
/// and filter selection, and the derived result published on a watch channel
///
/// Query changes are debounced; filter changes apply immediately.
pub struct DiscoverySession {
    inner: Arc<SessionInner>,
    debouncer: Debouncer<String>,
}

impl DiscoverySession {
    pub fn new(evaluator: Arc<DiscoveryEvaluator>, debounce_window: Duration) -> Self {
        let (state, _) = watch::channel(DiscoveryState::Loading);
        let inner = Arc::new(SessionInner {
            evaluator,
            data: Mutex::new(SessionData {
                source: Source::Loading,
                query: String::new(),
                selection: FilterSelection::new(),
            }),
            state,
            evaluations: AtomicUsize::new(0),
        });

        let target = Arc::clone(&inner);
        let debouncer = Debouncer::new(debounce_window, move |query: String| {
            target.apply_query(query)
        });

        Self { inner, debouncer }
    }

    /// Fetch every creator and evaluate the current query and selection
    ///
    /// On failure the session shows `Failed` and the evaluator does not run.
    pub async fn load(&self, repository: &dyn CreatorRepository) -> AppResult<usize> {
        {
            let mut data = self.inner.lock();
            data.source = Source::Loading;
        }
        self.inner.state.send_replace(DiscoveryState::Loading);

        match repository.get_all().await {
            Ok(creators) => {
                let count = creators.len();
                log_debug!("Discovery session loaded {} creators", count);
                let mut data = self.inner.lock();
                data.source = Source::Loaded(creators);
                self.inner.refresh(&data);
                Ok(count)
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Failed to load creators for discovery");
                self.inner
                    .state
                    .send_replace(DiscoveryState::Failed(e.to_string()));
                self.inner.lock().source = Source::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Schedule a query change; applied once typing pauses for the debounce window
    pub fn set_query(&self, query: impl Into<String>) -> bool {
        self.debouncer.call(query.into())
    }

    /// Apply a query immediately, discarding any pending debounced one
    pub fn apply_query_now(&self, query: impl Into<String>) {
        self.debouncer.cancel();
        self.inner.apply_query(query.into());
    }

    /// Returns whether the option is selected afterwards
    pub fn toggle_filter(&self, option: &str) -> bool {
        let mut data = self.inner.lock();
        let selected = data.selection.toggle(option);
        self.inner.refresh(&data);
        selected
    }

    pub fn clear_filters(&self) {
        let mut data = self.inner.lock();
        if data.selection.is_empty() {
            return;
        }
        data.selection.clear();
        self.inner.refresh(&data);
    }

    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    pub fn selection(&self) -> FilterSelection {
        self.inner.lock().selection.clone()
    }

    /// The load error, if the last load failed
    pub fn load_error(&self) -> Option<AppError> {
        match &self.inner.lock().source {
            Source::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DiscoveryState> {
        self.inner.state.subscribe()
    }

    pub fn current(&self) -> DiscoveryState {
        self.inner.state.borrow().clone()
    }

    /// Number of evaluations run so far
    pub fn evaluations(&self) -> usize {
        self.inner.evaluations.load(Ordering::SeqCst)
    }

    pub fn has_pending_query(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Tear down: cancel any pending query and ignore later `set_query` calls
    pub fn close(&self) {
        self.debouncer.shutdown();
    }
}
