use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use super::error::ApiError;
use super::models::RouteCandidate;

const BUNDLED_ROUTES: &str = include_str!("../../assets/routes.json");

/// Where the results screen gets its candidate routes from.
#[async_trait]
pub(super) trait RouteSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RouteCandidate>, ApiError>;
}

/// Static route data served after a simulated network delay.
pub(super) struct BundledRoutes {
    routes: Vec<RouteCandidate>,
    delay: Duration,
}

impl BundledRoutes {
    pub(super) fn from_json(text: &str, delay: Duration) -> Result<Self, ApiError> {
        let routes: Vec<RouteCandidate> = serde_json::from_str(text)?;
        Ok(Self { routes, delay })
    }

    pub(super) fn bundled(delay: Duration) -> Result<Self, ApiError> {
        Self::from_json(BUNDLED_ROUTES, delay)
    }

    pub(super) fn from_file(path: &Path, delay: Duration) -> Result<Self, ApiError> {
        log::info!("Loading route data from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text, delay)
    }
}

#[async_trait]
impl RouteSource for BundledRoutes {
    async fn fetch(&self) -> Result<Vec<RouteCandidate>, ApiError> {
        log::debug!("Fetching {} routes after {:?}", self.routes.len(), self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(self.routes.clone())
    }
}
