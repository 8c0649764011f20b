use async_trait::async_trait;

use super::error::ApiError;
use super::models::{GeoPoint, Mode, RoutePath};

const CN_TOWER: GeoPoint = GeoPoint::new(43.6426, -79.3871);
const HIGH_PARK: GeoPoint = GeoPoint::new(43.6465, -79.4637);

/// Which end of the trip a place name stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Endpoint {
    Start,
    End,
}

/// Turns free-text place names into coordinates.
#[async_trait]
pub(super) trait PlaceResolver: Send + Sync {
    /// Fails with [`ApiError::PlaceNotFound`] when the text names no known place.
    async fn resolve_place(&self, text: &str, endpoint: Endpoint) -> Result<GeoPoint, ApiError>;
}

/// Produces the line drawn between two resolved places.
#[async_trait]
pub(super) trait RouteComputer: Send + Sync {
    /// Fails with [`ApiError::Unroutable`] when the places cannot be connected.
    async fn compute_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: Mode,
    ) -> Result<RoutePath, ApiError>;
}

/// Stand-in resolver: every trip runs from the CN Tower to High Park.
pub(super) struct FixedPlaces {
    start: GeoPoint,
    end: GeoPoint,
}

impl Default for FixedPlaces {
    fn default() -> Self {
        Self {
            start: CN_TOWER,
            end: HIGH_PARK,
        }
    }
}

#[async_trait]
impl PlaceResolver for FixedPlaces {
    async fn resolve_place(&self, text: &str, endpoint: Endpoint) -> Result<GeoPoint, ApiError> {
        let point = match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        };
        log::debug!("Resolved '{text}' ({endpoint:?}) to {point:?}");
        Ok(point)
    }
}

/// Stand-in router: a straight segment, whatever the mode.
pub(super) struct StraightLine;

#[async_trait]
impl RouteComputer for StraightLine {
    async fn compute_route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        _mode: Mode,
    ) -> Result<RoutePath, ApiError> {
        Ok(RoutePath::straight(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn fixed_places_ignore_the_text() {
        let places = FixedPlaces::default();
        let a = places.resolve_place("Anywhere", Endpoint::Start).await.unwrap();
        let b = places.resolve_place("Somewhere else", Endpoint::Start).await.unwrap();
        let end = places.resolve_place("Anywhere", Endpoint::End).await.unwrap();

        assert_eq!(a, CN_TOWER);
        assert_eq!(b, CN_TOWER);
        assert_eq!(end, HIGH_PARK);
    }

    #[actix_web::test]
    async fn straight_line_has_two_points() {
        let path = StraightLine
            .compute_route(CN_TOWER, HIGH_PARK, Mode::Walking)
            .await
            .unwrap();
        assert_eq!(path.points, vec![CN_TOWER, HIGH_PARK]);
    }
}
