use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;
use utoipa::OpenApi;

use crate::api::dtos::RouteNotFoundResponse;
use crate::api::openapi::ApiDoc;
use crate::application::MasjidService;
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod masjids;

#[derive(Clone)]
pub struct AppState {
    pub masjid_service: Arc<MasjidService>,
    pub security: SecurityConfig,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/api")
                .configure(masjids::configure)
                .default_service(web::route().to(api_not_found)),
        )
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready))
        .route("/metrics", web::get().to(metrics));
}

pub(crate) async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(RouteNotFoundResponse {
        message: "Not Found Router".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::database_unavailable(format!("Service not ready: {e}")))?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    let admin_token = state
        .security
        .metrics_admin_token
        .as_deref()
        .filter(|token| !token.is_empty());
    let admin_header = request
        .headers()
        .get("x-admin-token")
        .and_then(|value| value.to_str().ok());
    let is_admin = admin_token.is_some() && admin_header == admin_token;

    if !is_admin && state.security.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or_else(metrics_forbidden)?;

        if !is_private_or_loopback(ip) {
            return Err(metrics_forbidden());
        }
    }

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(state.metrics.render_prometheus(
            state.db_pool.size(),
            state.db_pool.num_idle(),
        )))
}

fn metrics_forbidden() -> AppError {
    AppError::Forbidden("metrics are only served to private networks".to_string())
}

fn is_private_or_loopback(ip: std::net::IpAddr) -> bool {
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}
