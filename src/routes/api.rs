use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{CoverageReport, TargetAngles};
use crate::models::{ErrorResponse, HealthResponse, MatchQuery, MatchesResponse};
use crate::routes::AppState;
use crate::services::parse_time;

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(find_matches))
        .route("/coverage", web::get().to(coverage));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Every match for a time, with its closeness and pick weight
///
/// GET /api/v1/matches?time=15:05
/// GET /api/v1/matches?hour_angle=92.5&minute_angle=30
async fn find_matches(
    state: web::Data<AppState>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for matches query: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let target = match (&query.time, query.hour_angle, query.minute_angle) {
        (Some(time), _, _) => match parse_time(time) {
            Ok(time) => TargetAngles::from_wall_time(time),
            Err(e) => return bad_request("Invalid time", e.to_string()),
        },
        (None, Some(hour), Some(minute)) => {
            // range() lets NaN through
            if !hour.is_finite() || !minute.is_finite() {
                return bad_request(
                    "Invalid angle",
                    "hour_angle and minute_angle must be finite numbers".to_string(),
                );
            }
            TargetAngles::new(hour, minute)
        }
        _ => {
            return bad_request(
                "Missing target",
                "Provide either time or both hour_angle and minute_angle".to_string(),
            );
        }
    };

    let matches = state
        .matcher
        .find_matching_entries(state.catalog.entries(), &target);

    tracing::debug!(
        "Diagnostic match for hour={} minute={}: {} matches",
        target.hour,
        target.minute,
        matches.len()
    );

    HttpResponse::Ok().json(MatchesResponse::from_matches(
        target.hour,
        target.minute,
        &matches,
        &state.matcher,
    ))
}

/// Per-minute coverage of the whole dial
async fn coverage(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CoverageReport::build(&state.matcher, state.catalog.entries()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;
    use crate::core::Matcher;
    use crate::models::Entry;
    use crate::services::Catalog;
    use actix_web::{http::StatusCode, test, App};

    fn state() -> AppState {
        let catalog = Catalog::from_entries(vec![
            Entry::new("three.jpg", 90, 0),
            Entry::new("almost-three.jpg", 95, 10),
            Entry::new("nine.jpg", 270, 0),
        ])
        .unwrap();
        AppState::new(catalog, Matcher::default(), SiteSettings::default())
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.catalog_size, 3);
    }

    #[actix_web::test]
    async fn test_matches_by_time() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/matches?time=15:00").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["best_closeness"], 0.0);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["entry"]["filename"], "three.jpg");
        assert_eq!(matches[0]["weight"], 90.0);
        assert_eq!(matches[1]["closeness"], 15.0);
        assert_eq!(matches[1]["weight"], 75.0);
    }

    #[actix_web::test]
    async fn test_matches_by_angles() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/matches?hour_angle=270&minute_angle=0")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["entry"]["filename"], "nine.jpg");
    }

    #[actix_web::test]
    async fn test_matches_rejects_bad_input() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        for uri in [
            "/api/v1/matches",
            "/api/v1/matches?time=teatime",
            "/api/v1/matches?hour_angle=400&minute_angle=0",
            "/api/v1/matches?hour_angle=10",
            "/api/v1/matches?hour_angle=NaN&minute_angle=90",
            "/api/v1/matches?hour_angle=0&minute_angle=NaN",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }
}
