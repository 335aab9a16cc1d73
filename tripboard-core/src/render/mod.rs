//! Render models: what each panel shows, derived from API payloads
//! without touching the page.

use thiserror::Error;

pub mod bookmarks;
pub mod places;
pub mod travel;
pub mod weather;

pub use self::{bookmarks::*, places::*, travel::*, weather::*};

/// State of a panel that is filled by an asynchronous request.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PanelContent<T> {
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("{0}")]
    Reported(String),
    #[error("No current conditions")]
    MissingCurrent,
    #[error("No current temperature")]
    MissingTemperature,
}
