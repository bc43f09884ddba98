//! Text renderers for pages and shared chrome

pub mod layout;
pub mod skeleton;
pub mod tab_bar;
pub mod toast;
pub mod wheel;

use voltup_core::{Error, Result};

/// A section's data as the page sees it
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Still loading, or the page was torn down before the data arrived
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    /// Fold a scoped fetch (`None` = dropped) into a section state
    pub fn from_scoped(result: Option<Result<T>>, message: fn(&Error) -> String) -> Self {
        match result {
            None => Loadable::Loading,
            Some(Ok(value)) => Loadable::Ready(value),
            Some(Err(e)) => Loadable::Failed(message(&e)),
        }
    }
}
