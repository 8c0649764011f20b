mod error;
mod handlers;
mod input;
mod map;
mod models;
mod places;
mod ranking;
mod results;
mod source;
mod util;
#[cfg(test)]
mod debug_tests;

use actix_web::web;

use crate::config::Config;
use input::{Pause, SimulatedLatency};
use map::{MapCapability, NativeMaps};
use places::{FixedPlaces, PlaceResolver, RouteComputer, StraightLine};
use source::{BundledRoutes, RouteSource};

pub use error::ApiError;
pub use map::Platform;

/// Collaborators shared by every request; fixed once the service starts.
pub struct AppState {
    routes: Box<dyn RouteSource>,
    resolver: Box<dyn PlaceResolver>,
    router: Box<dyn RouteComputer>,
    capability: MapCapability,
    pause: Box<dyn Pause>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let routes = match &config.routes_file {
            Some(path) => BundledRoutes::from_file(path, config.fetch_delay)?,
            None => BundledRoutes::bundled(config.fetch_delay)?,
        };

        Ok(Self {
            routes: Box::new(routes),
            resolver: Box::new(FixedPlaces::default()),
            router: Box::new(StraightLine),
            capability: MapCapability::detect(config.platform, &NativeMaps),
            pause: Box::new(SimulatedLatency(config.submit_delay)),
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::configure(cfg);
}
