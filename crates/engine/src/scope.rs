//! View scope
//!
//! A page owns a [`Scope`] for as long as it is shown. Requests started
//! through it resolve to `None` once the page is torn down, so a late
//! response can never write into a view that no longer exists.

use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct Scope {
    name: &'static str,
    cancel: CancellationToken,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cancel: CancellationToken::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// A token that is cancelled when this scope closes
    pub fn token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    /// Tear down the scope. Pending work started through it is dropped.
    pub fn close(&self) {
        if self.is_active() {
            debug!("Closing scope {}", self.name);
            self.cancel.cancel();
        }
    }

    /// Run `fut` unless the scope closes first.
    ///
    /// A result that arrives after [`close`](Self::close) is discarded.
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        if !self.is_active() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Dropping late result in scope {}", self.name);
                None
            }
            out = fut => {
                if self.is_active() { Some(out) } else { None }
            }
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
