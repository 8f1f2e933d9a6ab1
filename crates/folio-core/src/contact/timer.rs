//! Cancellable one-shot timer for the post-submit reset.
//!
//! Arming a new timer cancels the previous one, and dropping the owner
//! cancels whatever is pending, so a reset never fires against a form that
//! is gone.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Delay between a successful send and the form reset
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Owner of the (at most one) pending reset
#[derive(Debug)]
pub struct ResetTimer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Default for ResetTimer {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ResetTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Start a new countdown, superseding any pending one.
    ///
    /// The returned future resolves to `true` once the delay has elapsed and
    /// to `false` if the countdown was cancelled first. It does not borrow
    /// the timer and can be handed to any executor.
    pub fn arm(&mut self) -> impl Future<Output = bool> + Send + 'static {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let delay = self.delay;

        async move {
            tokio::select! {
                _ = token.cancelled() => false,
                _ = tokio::time::sleep(delay) => {
                    token.cancel();
                    true
                }
            }
        }
    }

    /// Cancel the pending countdown, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            if !token.is_cancelled() {
                tracing::debug!("pending form reset cancelled");
            }
            token.cancel();
        }
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
