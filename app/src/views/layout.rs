//! Page frame: title, body, bottom tab bar and toasts

use super::{tab_bar, toast};
use crate::router::Route;
use voltup_engine::Toast;

pub const RULE: &str = "────────────────────────────────────────";

pub fn page(title: &str, body: &str, active: Option<Route>, toasts: &[Toast]) -> String {
    let mut out = Vec::new();
    out.push(format!("VoltUp · {}", title));
    out.push(RULE.to_string());
    if !body.is_empty() {
        out.push(body.trim_end().to_string());
    }
    if !toasts.is_empty() {
        out.push(String::new());
        out.push(toast::render(toasts));
    }
    if let Some(active) = active {
        out.push(RULE.to_string());
        out.push(tab_bar::render(active));
    }
    out.join("\n")
}

/// Modal box drawn inside a page
pub fn modal(title: &str, lines: &[String]) -> String {
    let mut out = vec![format!("┌ {}", title)];
    out.extend(lines.iter().map(|line| format!("│ {}", line)));
    out.push("└".to_string());
    out.join("\n")
}
