//! Toast rendering

use voltup_engine::{Toast, ToastKind};

pub fn render(toasts: &[Toast]) -> String {
    toasts
        .iter()
        .map(|toast| {
            let marker = match toast.kind {
                ToastKind::Success => "✓",
                ToastKind::Error => "!",
                ToastKind::Info => "·",
            };
            format!("{} {}", marker, toast.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
