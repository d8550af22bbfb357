//! Project submission and retrieval handlers.

use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;

use workmon_commons::models::NewProject;
use workmon_store::ProjectStore;

use crate::models::{
    DuplicateResponse, ErrorResponse, ProjectListResponse, ProjectSavedResponse,
};

/// POST /api/projects - Persist a scraped listing submitted by the collector.
///
/// The body is parsed by hand so an empty or malformed payload maps to the
/// documented 400 shape instead of the framework default. Missing required
/// fields are collected and reported together, before storage is touched.
/// A duplicate id is a successful no-op, answered with 200.
#[post("/projects")]
pub async fn submit_project(
    body: web::Bytes,
    store: web::Data<Arc<ProjectStore>>,
) -> impl Responder {
    if body.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("No data provided"));
    }

    let submission: NewProject = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(err) => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(format!("Invalid JSON payload: {}", err)));
        }
    };

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Missing required fields: {:?}",
            missing
        )));
    }

    let project_id = submission.id.clone().unwrap_or_default();
    match store.append(submission) {
        Ok(true) => {
            info!("Project {} saved", project_id);
            HttpResponse::Created().json(ProjectSavedResponse::new(project_id))
        }
        Ok(false) => {
            info!("Project {} already exists, skipping", project_id);
            HttpResponse::Ok().json(DuplicateResponse::new())
        }
        Err(err) => {
            error!("Failed to persist project {}: {}", project_id, err);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
}

/// GET /api/projects - List stored records in table order.
///
/// `limit` keeps the front of the sequence; a missing, zero, or
/// non-numeric limit returns everything. `total` counts the returned
/// slice.
#[get("/projects")]
pub async fn list_projects(
    query: web::Query<ListQuery>,
    store: web::Data<Arc<ProjectStore>>,
) -> impl Responder {
    let mut projects = store.load_all();

    if let Some(limit) = query.limit.as_deref().and_then(|raw| raw.parse::<usize>().ok()) {
        if limit > 0 && projects.len() > limit {
            projects.truncate(limit);
        }
    }

    let total = projects.len();
    HttpResponse::Ok().json(ProjectListResponse { projects, total })
}

/// GET /api/projects/{id} - Fetch a single record by id.
#[get("/projects/{id}")]
pub async fn get_project(
    path: web::Path<String>,
    store: web::Data<Arc<ProjectStore>>,
) -> impl Responder {
    let id = path.into_inner();
    match store.load_all().into_iter().find(|project| project.id == id) {
        Some(project) => HttpResponse::Ok().json(project),
        None => HttpResponse::NotFound().json(ErrorResponse::new("Project not found")),
    }
}
