use thiserror::Error;

use crate::{gateways, render::RenderError};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
    #[error("Pick a destination from places")]
    NoDestination,
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error("Destination not found")]
    DestinationNotFound,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Reported by the presentation layer when no device position is available.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeolocationError {
    #[error("Geolocation not supported")]
    Unsupported,
    #[error("Failed to get location: {0}")]
    Denied(String),
}
