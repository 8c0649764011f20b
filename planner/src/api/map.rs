use serde::Serialize;
use std::str::FromStr;

use super::error::ApiError;
use super::models::{GeoPoint, MapParams, Mode, RoutePath};
use super::places::{Endpoint, PlaceResolver, RouteComputer};
use super::util::midpoint;

const REGION_DELTA: f64 = 0.1;
const STROKE_WIDTH: u32 = 3;
const UNSUPPORTED_MESSAGE: &str = "Map is not supported on web.";

/// Display target the service renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Native,
    Web,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "ios" | "android" => Ok(Platform::Native),
            "web" => Ok(Platform::Web),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct MapWidget {
    pub(super) provider: &'static str,
}

pub(super) trait MapWidgetLoader {
    fn load(&self) -> MapWidget;
}

pub(super) struct NativeMaps;

impl MapWidgetLoader for NativeMaps {
    fn load(&self) -> MapWidget {
        MapWidget {
            provider: "native-maps",
        }
    }
}

/// The map widget, if the platform has one. Resolved once at startup.
#[derive(Debug, Clone)]
pub(super) enum MapCapability {
    Available(MapWidget),
    Unsupported,
}

impl MapCapability {
    pub(super) fn detect(platform: Platform, loader: &dyn MapWidgetLoader) -> Self {
        match platform {
            Platform::Web => {
                log::info!("Map widget unavailable on {platform:?}");
                MapCapability::Unsupported
            }
            Platform::Native => MapCapability::Available(loader.load()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct Region {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
    pub(super) latitude_delta: f64,
    pub(super) longitude_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct Marker {
    pub(super) coordinate: GeoPoint,
    pub(super) title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct Polyline {
    pub(super) coordinates: RoutePath,
    pub(super) stroke_color: &'static str,
    pub(super) stroke_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct MapScene {
    pub(super) widget: MapWidget,
    pub(super) mode: Mode,
    pub(super) region: Region,
    pub(super) markers: Vec<Marker>,
    pub(super) polyline: Polyline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub(super) enum MapScreenState {
    Loading,
    Ready { scene: MapScene },
    Unsupported { message: &'static str },
}

/// Map screen filled in step by step; it stays loading until every piece is known.
pub(super) struct MapScreen {
    params: MapParams,
    supported: bool,
    widget: Option<MapWidget>,
    start: Option<GeoPoint>,
    end: Option<GeoPoint>,
    path: Option<RoutePath>,
}

impl MapScreen {
    pub(super) fn new(params: MapParams, capability: &MapCapability) -> Self {
        let (supported, widget) = match capability {
            MapCapability::Available(widget) => (true, Some(widget.clone())),
            MapCapability::Unsupported => (false, None),
        };
        Self {
            params,
            supported,
            widget,
            start: None,
            end: None,
            path: None,
        }
    }

    pub(super) fn set_start(&mut self, point: GeoPoint) {
        self.start = Some(point);
    }

    pub(super) fn set_end(&mut self, point: GeoPoint) {
        self.end = Some(point);
    }

    pub(super) fn set_path(&mut self, path: RoutePath) {
        self.path = Some(path);
    }

    pub(super) fn mode(&self) -> Mode {
        Mode::from_param(self.params.mode.as_deref())
    }

    pub(super) fn state(&self) -> MapScreenState {
        if !self.supported {
            return MapScreenState::Unsupported {
                message: UNSUPPORTED_MESSAGE,
            };
        }

        let (Some(widget), Some(start), Some(end), Some(path)) =
            (&self.widget, self.start, self.end, &self.path)
        else {
            return MapScreenState::Loading;
        };

        let center = midpoint(start, end);
        let mode = self.mode();

        MapScreenState::Ready {
            scene: MapScene {
                widget: widget.clone(),
                mode,
                region: Region {
                    latitude: center.latitude,
                    longitude: center.longitude,
                    latitude_delta: REGION_DELTA,
                    longitude_delta: REGION_DELTA,
                },
                markers: vec![
                    Marker {
                        coordinate: start,
                        title: self.params.from.clone(),
                    },
                    Marker {
                        coordinate: end,
                        title: self.params.to.clone(),
                    },
                ],
                polyline: Polyline {
                    coordinates: path.clone(),
                    stroke_color: mode.stroke_color(),
                    stroke_width: STROKE_WIDTH,
                },
            },
        }
    }
}

/// Resolves both places, draws the route between them and describes the map to show.
pub(super) async fn present_map(
    params: MapParams,
    capability: &MapCapability,
    resolver: &dyn PlaceResolver,
    router: &dyn RouteComputer,
) -> Result<MapScreenState, ApiError> {
    let mut screen = MapScreen::new(params, capability);
    if !screen.supported {
        return Ok(screen.state());
    }

    let start = resolver
        .resolve_place(&screen.params.from, Endpoint::Start)
        .await?;
    screen.set_start(start);

    let end = resolver
        .resolve_place(&screen.params.to, Endpoint::End)
        .await?;
    screen.set_end(end);

    let path = router.compute_route(start, end, screen.mode()).await?;
    screen.set_path(path);

    log::info!(
        "Map ready for {} from '{}' to '{}'",
        screen.mode(),
        screen.params.from,
        screen.params.to
    );
    Ok(screen.state())
}
