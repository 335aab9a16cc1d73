pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateways;
pub mod geo;
pub mod map;
pub mod render;
pub mod state;
pub mod usecases;
pub mod view;

pub use tripboard_boundary as boundary;

pub use self::{
    config::Config,
    controller::{Surface, ViewController},
    error::{Error, GeolocationError},
    gateways::TravelGateway,
    view::{View, ViewUpdate},
};
