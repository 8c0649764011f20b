use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::time::Duration;

use super::input::SimulatedLatency;
use super::map::{MapCapability, NativeMaps, Platform};
use super::places::{FixedPlaces, StraightLine};
use super::source::BundledRoutes;
use super::{configure, AppState};

fn state(platform: Platform, routes_json: Option<&str>) -> web::Data<AppState> {
    let routes = match routes_json {
        Some(text) => BundledRoutes::from_json(text, Duration::ZERO).unwrap(),
        None => BundledRoutes::bundled(Duration::ZERO).unwrap(),
    };
    web::Data::new(AppState {
        routes: Box::new(routes),
        resolver: Box::new(FixedPlaces::default()),
        router: Box::new(StraightLine),
        capability: MapCapability::detect(platform, &NativeMaps),
        pause: Box::new(SimulatedLatency(Duration::ZERO)),
    })
}

#[actix_web::test]
async fn search_then_results_then_map() {
    let app = test::init_service(
        App::new()
            .app_data(state(Platform::Native, None))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/search")
        .set_json(json!({"from": "Union Station", "to": "High Park"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["params"]["from"], "Union Station");
    let next = body["next"].as_str().unwrap().to_string();
    assert!(next.starts_with("/results?"));

    let req = test::TestRequest::get().uri(&next).to_request();
    let results: Value = test::call_and_read_body_json(&app, req).await;
    let cards = results["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["mode"], "bicycling");
    assert_eq!(cards[1]["mode"], "walking");
    assert_eq!(cards[2]["mode"], "transit");
    assert_eq!(cards[0]["medal"], "🥇");
    assert_eq!(cards[2]["badge"]["style"], "third");
    assert_eq!(results["subtitle"], "From Union Station to High Park");

    let link = cards[1]["link"].as_str().unwrap();
    let req = test::TestRequest::get().uri(link).to_request();
    let map: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(map["state"], "ready");
    assert_eq!(map["scene"]["mode"], "walking");
    assert_eq!(map["scene"]["polyline"]["stroke_color"], "#FFA500");
    assert_eq!(map["scene"]["markers"][0]["title"], "Union Station");
    assert_eq!(map["scene"]["markers"][1]["title"], "High Park");
    assert_eq!(
        map["scene"]["polyline"]["coordinates"].as_array().unwrap().len(),
        2
    );
}

#[actix_web::test]
async fn blank_search_is_a_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(state(Platform::Native, None))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/search")
        .set_json(json!({"from": "Union Station", "to": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn results_need_both_places() {
    let app = test::init_service(
        App::new()
            .app_data(state(Platform::Native, None))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/results?from=Union%20Station")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing navigation parameter 'to'");
}

#[actix_web::test]
async fn empty_route_data_shows_empty_state() {
    let app = test::init_service(
        App::new()
            .app_data(state(Platform::Native, Some("[]")))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/results?from=A&to=B")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["cards"].as_array().unwrap().is_empty());
    assert_eq!(body["empty_message"], "No routes found.");
}

#[actix_web::test]
async fn web_platform_gets_fallback_message() {
    let app = test::init_service(
        App::new()
            .app_data(state(Platform::Web, None))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/map?mode=transit&from=A&to=B")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["state"], "unsupported");
    assert_eq!(body["message"], "Map is not supported on web.");
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"ok": true}));
}
