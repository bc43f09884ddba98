//! Pages, one per route

pub mod home;
pub mod login;
pub mod my_info;
pub mod orders;
pub mod products;
pub mod roulette;

use crate::router::Route;
use crate::state::AppState;
use crate::views::layout;

/// Wrap a page body in the shared chrome, flushing pending toasts
pub(crate) fn frame(state: &AppState, route: Route, body: &str) -> String {
    let toasts = state.toasts.drain();
    let tab = (route != Route::Login).then_some(route);
    layout::page(route.label(), body, tab, &toasts)
}
