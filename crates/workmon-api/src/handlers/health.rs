//! Liveness probe handler.

use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use workmon_store::ProjectStore;

use crate::models::HealthResponse;

/// GET /api/health - Always-healthy probe.
///
/// Succeeds for as long as the process is alive; the payload reports the
/// current timestamp and whether the backing file exists. No authentication,
/// designed for the collector's connectivity check.
#[get("/health")]
pub async fn health_check(store: web::Data<Arc<ProjectStore>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::current(store.exists()))
}
