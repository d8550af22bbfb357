//! Aggregate statistics handler.

use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use log::debug;
use std::sync::Arc;

use workmon_store::ProjectStore;

use crate::models::StatsResponse;

/// Parse a stored `Scraped_At` cell into its calendar date.
///
/// Accepts RFC 3339 timestamps, the zone-less
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` shape the store writes by default, and
/// bare `YYYY-MM-DD` dates.
fn scraped_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed);
    }
    None
}

/// GET /api/stats - Total and same-day record counts.
///
/// A record whose timestamp fails to parse still counts toward the total
/// but is skipped for the same-day count; the skip is an explicit logged
/// branch, not a swallowed failure.
#[get("/stats")]
pub async fn get_stats(store: web::Data<Arc<ProjectStore>>) -> impl Responder {
    let projects = store.load_all();
    let today = Local::now().date_naive();

    let mut today_projects = 0;
    for project in &projects {
        match scraped_date(&project.scraped_at) {
            Some(date) if date == today => today_projects += 1,
            Some(_) => {}
            None => {
                debug!(
                    "Project {} has unparseable Scraped_At '{}', excluded from today count",
                    project.id, project.scraped_at
                );
            }
        }
    }

    HttpResponse::Ok().json(StatsResponse {
        total_projects: projects.len(),
        today_projects,
        excel_file_exists: store.exists(),
    })
}
