//! Toast notifications
//!
//! Transient messages shown after mutations (purchase done, not enough
//! points...). Each toast expires on its own after [`TOAST_LIFETIME`].

use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// How long a toast stays visible
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Anything that can display a toast
pub trait ToastSink: Send + Sync {
    fn show(&self, kind: ToastKind, message: String);

    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message.to_string());
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message.to_string());
    }
}

struct ToastInner {
    next_id: u64,
    items: Vec<(Toast, Instant)>,
}

/// In-process toast queue with per-toast expiry
pub struct ToastCenter {
    inner: Mutex<ToastInner>,
    lifetime: Duration,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::with_lifetime(TOAST_LIFETIME)
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            inner: Mutex::new(ToastInner {
                next_id: 1,
                items: Vec::new(),
            }),
            lifetime,
        }
    }

    /// Toasts still visible, oldest first. Expired ones are dropped.
    pub fn active(&self) -> Vec<Toast> {
        let Ok(mut inner) = self.inner.lock() else {
            return Vec::new();
        };
        let lifetime = self.lifetime;
        inner.items.retain(|(_, shown_at)| shown_at.elapsed() < lifetime);
        inner.items.iter().map(|(toast, _)| toast.clone()).collect()
    }

    /// Close a toast before it expires
    pub fn dismiss(&self, id: u64) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.items.retain(|(toast, _)| toast.id != id);
        }
    }

    /// Remove and return everything visible (a one-shot CLI prints and forgets)
    pub fn drain(&self) -> Vec<Toast> {
        let toasts = self.active();
        if let Ok(mut inner) = self.inner.lock() {
            inner.items.clear();
        }
        toasts
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSink for ToastCenter {
    fn show(&self, kind: ToastKind, message: String) {
        debug!("Toast ({:?}): {}", kind, message);
        if let Ok(mut inner) = self.inner.lock() {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.items.push((Toast { id, kind, message }, Instant::now()));
        }
    }
}
