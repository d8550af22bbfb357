//! API routes configuration.
//!
//! All endpoints live under the `/api` scope:
//! - POST /api/projects - persist a scraped listing
//! - GET /api/projects - list stored listings (optional ?limit=N)
//! - GET /api/projects/{id} - fetch one listing
//! - GET /api/export/excel - export availability report
//! - GET /api/download/excel - download the spreadsheet
//! - GET /api/stats - total and same-day counts
//! - GET /api/health - liveness probe

use crate::handlers;
use actix_web::web;

/// Configure API routes for workmon.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::submit_project)
            .service(handlers::list_projects)
            .service(handlers::get_project)
            .service(handlers::export_excel)
            .service(handlers::download_excel)
            .service(handlers::get_stats)
            .service(handlers::health_check),
    );
}
