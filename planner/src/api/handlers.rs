use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use super::error::ApiError;
use super::input::InputForm;
use super::map::present_map;
use super::models::{MapQuery, ResultsQuery};
use super::ranking::{rank, TOP_ROUTES};
use super::results::present_results;
use super::AppState;

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(search)
        .service(results)
        .service(map);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[post("/search")]
async fn search(
    state: web::Data<AppState>,
    req: web::Json<InputForm>,
) -> Result<HttpResponse, ApiError> {
    let mut form = req.into_inner();

    match form.submit(state.pause.as_ref()).await {
        Ok(params) => {
            let next = params.results_link()?;
            Ok(HttpResponse::Ok().json(json!({ "params": params, "next": next })))
        }
        Err(ApiError::SearchFailed) => Ok(HttpResponse::InternalServerError().json(json!({
            "error": form.error(),
            "can_retry": form.can_submit(),
        }))),
        Err(e) => Err(e),
    }
}

#[get("/results")]
async fn results(
    state: web::Data<AppState>,
    q: web::Query<ResultsQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = q.into_inner().into_params()?;
    log::info!("Ranking routes from '{}' to '{}'", params.from, params.to);

    let candidates = state.routes.fetch().await?;
    let ranked = rank(&candidates, TOP_ROUTES);
    let view = present_results(&params, &ranked)?;

    Ok(HttpResponse::Ok().json(view))
}

#[get("/map")]
async fn map(
    state: web::Data<AppState>,
    q: web::Query<MapQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = q.into_inner().into_params()?;

    let screen = present_map(
        params,
        &state.capability,
        state.resolver.as_ref(),
        state.router.as_ref(),
    )
    .await
    .inspect_err(|e| log::warn!("Map could not be built: {e}"))?;

    Ok(HttpResponse::Ok().json(screen))
}
