use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::log_warn;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

struct Pending {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Pending {
    fn cancel(self) {
        self.token.cancel();
        self.handle.abort();
    }
}

/// Trailing-edge debounce owned by its caller
///
/// Each `call` replaces any pending run; the action fires once for the latest
/// value after `window` passes without another call. Dropping the debouncer,
/// or calling `shutdown`, cancels the pending run and refuses further calls.
/// Calls must be made from within a tokio runtime.
pub struct Debouncer<T> {
    window: Duration,
    action: Action<T>,
    pending: Mutex<Option<Pending>>,
    closed: CancellationToken,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(window: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            window,
            action: Arc::new(action),
            pending: Mutex::new(None),
            closed: CancellationToken::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value`, cancelling whatever was pending
    ///
    /// Returns false when the debouncer is shut down or no runtime is available.
    pub fn call(&self, value: T) -> bool {
        if self.closed.is_cancelled() {
            return false;
        }
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                log_warn!("Debounced call dropped, no runtime: {}", e);
                return false;
            }
        };

        let mut pending = self.lock();
        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        let token = self.closed.child_token();
        let cancelled = token.clone();
        let action = Arc::clone(&self.action);
        let window = self.window;

        let handle = runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(window) => action(value),
            }
        });

        *pending = Some(Pending { token, handle });
        true
    }

    /// Drop the pending run, if any; returns whether one was still waiting
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(pending) => {
                let waiting = !pending.handle.is_finished();
                pending.cancel();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|pending| !pending.handle.is_finished())
    }

    /// Cancel the pending run and refuse new calls
    pub fn shutdown(&self) {
        self.closed.cancel();
        self.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.closed.is_cancelled()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.closed.cancel();
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pending) = pending {
            pending.cancel();
        }
    }
}
