// Route exports
pub mod api;
pub mod pages;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::config::SiteSettings;
use crate::core::Matcher;
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(catalog: Catalog, matcher: Matcher, site: SiteSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matcher,
            site: Arc::new(site),
        }
    }
}

/// Register the JSON API under `/api/v1`, then the HTML pages
///
/// Pages go last: `/{time}` and `/{region}/{location}` match almost anything.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(api::configure))
        .configure(pages::configure);
}

/// JSON error body for rejected API requests
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
