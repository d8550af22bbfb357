//! Spreadsheet export and download handlers.

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Local;
use log::error;
use std::sync::Arc;

use workmon_store::ProjectStore;

use crate::models::{ErrorResponse, ExportResponse};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /api/export/excel - Report whether the table is ready for download.
///
/// Absence of the backing file is a 404, distinct from a server fault.
#[get("/export/excel")]
pub async fn export_excel(store: web::Data<Arc<ProjectStore>>) -> impl Responder {
    if !store.exists() {
        return HttpResponse::NotFound().json(ErrorResponse::new("No data to export"));
    }
    HttpResponse::Ok().json(ExportResponse::ready(store.path().display().to_string()))
}

/// GET /api/download/excel - Stream the backing file as an attachment.
///
/// The filename carries a download timestamp so successive exports do not
/// overwrite each other on the client side.
#[get("/download/excel")]
pub async fn download_excel(store: web::Data<Arc<ProjectStore>>) -> impl Responder {
    if !store.exists() {
        return HttpResponse::NotFound().json(ErrorResponse::new("Excel file not found"));
    }

    match std::fs::read(store.path()) {
        Ok(data) => {
            let filename = Local::now().format("projects_%Y%m%d_%H%M%S.xlsx").to_string();
            HttpResponse::Ok()
                .content_type(XLSX_CONTENT_TYPE)
                .append_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(data)
        }
        Err(err) => {
            error!(
                "Failed to read {} for download: {}",
                store.path().display(),
                err
            );
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
