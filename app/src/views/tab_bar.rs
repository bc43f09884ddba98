//! Bottom tab bar

use crate::router::{Route, TABS};

/// `[Home]  Roulette  Products  My`; the active tab is bracketed.
/// Pages outside the tabs (orders) highlight nothing.
pub fn render(active: Route) -> String {
    TABS.iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
