use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum Mode {
    Driving,
    Bicycling,
    Transit,
    Walking,
}

impl Mode {
    pub(super) fn parse(value: &str) -> Option<Mode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "driving" => Some(Mode::Driving),
            "bicycling" => Some(Mode::Bicycling),
            "transit" => Some(Mode::Transit),
            "walking" => Some(Mode::Walking),
            _ => None,
        }
    }

    /// Mode carried by a navigation parameter. Absent or unknown text means driving.
    pub(super) fn from_param(value: Option<&str>) -> Mode {
        value.and_then(Mode::parse).unwrap_or(Mode::Driving)
    }

    pub(super) fn as_str(self) -> &'static str {
        match self {
            Mode::Driving => "driving",
            Mode::Bicycling => "bicycling",
            Mode::Transit => "transit",
            Mode::Walking => "walking",
        }
    }

    pub(super) fn icon(self) -> &'static str {
        match self {
            Mode::Driving => "🚗",
            Mode::Bicycling => "🚲",
            Mode::Transit => "🚆",
            Mode::Walking => "🚶‍♂️",
        }
    }

    /// Line colour used when the route is drawn on the map.
    pub(super) fn stroke_color(self) -> &'static str {
        match self {
            Mode::Driving => "#007AFF",
            Mode::Bicycling => "#4CD964",
            Mode::Transit => "#9B59B6",
            Mode::Walking => "#FFA500",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored way of travelling between the two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct RouteCandidate {
    pub(super) mode: Mode,
    pub(super) score: f64,
    pub(super) distance_km: f64,
    pub(super) time_min: f64,
    pub(super) co2_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(super) struct GeoPoint {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
}

impl GeoPoint {
    pub(super) const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub(super) struct RoutePath {
    pub(super) points: Vec<GeoPoint>,
}

impl RoutePath {
    pub(super) fn straight(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            points: vec![start, end],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct SearchParams {
    pub(super) from: String,
    pub(super) to: String,
}

impl SearchParams {
    pub(super) fn results_link(&self) -> Result<String, ApiError> {
        Ok(format!("/results?{}", serde_qs::to_string(self)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct MapParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) mode: Option<String>,
    pub(super) from: String,
    pub(super) to: String,
}

impl MapParams {
    pub(super) fn map_link(&self) -> Result<String, ApiError> {
        Ok(format!("/map?{}", serde_qs::to_string(self)?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ResultsQuery {
    pub(super) from: Option<String>,
    pub(super) to: Option<String>,
}

impl ResultsQuery {
    pub(super) fn into_params(self) -> Result<SearchParams, ApiError> {
        Ok(SearchParams {
            from: required("from", self.from)?,
            to: required("to", self.to)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct MapQuery {
    pub(super) mode: Option<String>,
    pub(super) from: Option<String>,
    pub(super) to: Option<String>,
}

impl MapQuery {
    pub(super) fn into_params(self) -> Result<MapParams, ApiError> {
        Ok(MapParams {
            mode: self.mode,
            from: required("from", self.from)?,
            to: required("to", self.to)?,
        })
    }
}

// Navigation parameters are opaque: only presence is checked.
fn required(name: &'static str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingParam(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_absent_mode_falls_back_to_driving() {
        assert_eq!(Mode::from_param(Some("bicycling")), Mode::Bicycling);
        assert_eq!(Mode::from_param(Some(" Transit ")), Mode::Transit);
        assert_eq!(Mode::from_param(Some("hovercraft")), Mode::Driving);
        assert_eq!(Mode::from_param(None), Mode::Driving);
    }

    #[test]
    fn candidate_reads_bundled_shape() {
        let candidate: RouteCandidate = serde_json::from_str(
            r#"{"mode":"walking","score":88,"distance_km":7.2,"time_min":91,"co2_g":0}"#,
        )
        .unwrap();
        assert_eq!(candidate.mode, Mode::Walking);
        assert_eq!(candidate.score, 88.0);
    }

    #[test]
    fn missing_navigation_param_is_rejected() {
        let query = ResultsQuery {
            from: Some("Union Station".into()),
            to: None,
        };
        assert!(matches!(query.into_params(), Err(ApiError::MissingParam("to"))));
    }

    #[test]
    fn map_link_encodes_free_text() {
        let params = MapParams {
            mode: Some("transit".into()),
            from: "CN Tower".into(),
            to: "High Park & Zoo".into(),
        };
        let link = params.map_link().unwrap();
        assert!(link.starts_with("/map?mode=transit&from=CN"));
        assert!(!link.contains(" & "));
    }
}
