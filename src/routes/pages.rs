use actix_web::{http::header, web, HttpResponse, Responder};
use rand::Rng;

use crate::core::{generate_time_for_entry, CoverageReport, TargetAngles};
use crate::models::{Entry, WallTime};
use crate::routes::AppState;
use crate::services::{format_time, now_in_timezone, parse_time, parse_timezone};
use crate::views::{
    render_bun_page, render_coverage_page, render_local_redirect_page, render_message_page,
    BunPage,
};

const HTML: &str = "text/html; charset=utf-8";

/// Configure the HTML page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(redirect_with_tz))
        .route("/local", web::get().to(local))
        .route("/coverage", web::get().to(coverage))
        .route("/buns/{bun_id}", web::get().to(with_bun))
        .route("/{time}", web::get().to(at_time))
        .route("/{region}/{location}", web::get().to(from_region))
        .route("/{region}/{location}/{city}", web::get().to(from_city));
}

/// Send visitors to the clock for the default timezone
async fn redirect_with_tz(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/{}", state.site.default_timezone)))
        .finish()
}

/// Page that sends the browser on to its own timezone
///
/// GET /local
async fn local(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(HTML)
        .body(render_local_redirect_page(&state.site.default_timezone))
}

/// A specific bun, showing a time its ears could be saying
///
/// GET /buns/{bun_id}
async fn with_bun(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let bun_id = path.into_inner();

    match state.catalog.find_entry_by_id(&bun_id) {
        Some(entry) => {
            let mut rng = rand::thread_rng();
            let time = generate_time_for_entry(entry, &mut rng);
            HttpResponse::Ok()
                .content_type(HTML)
                .body(bun_page(&state, entry, time, &mut rng))
        }
        None => {
            tracing::info!("No bun with filename {}", bun_id);
            HttpResponse::NotFound()
                .content_type(HTML)
                .body(render_message_page(&format!("No buns with filename {}", bun_id)))
        }
    }
}

/// The bun for a requested time
///
/// GET /{time}, eg /15:05, /3:05%20PM or /3:05+PM. Single-segment zones
/// such as /UTC are tried when the segment is not a time.
async fn at_time(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let time_str = path.into_inner();

    match parse_time(&time_str) {
        Ok(time) => respond_with_match(&state, time),
        Err(_) if parse_timezone(&time_str).is_ok() => respond_for_zone(&state, &time_str),
        Err(e) => {
            tracing::info!("{}", e);
            HttpResponse::BadRequest()
                .content_type(HTML)
                .body(render_message_page("Unable to parse time"))
        }
    }
}

/// The bun for the current time in a timezone
///
/// GET /{region}/{location}, eg /Australia/Sydney
async fn from_region(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (region, location) = path.into_inner();
    respond_for_zone(&state, &format!("{}/{}", region, location))
}

/// GET /{region}/{location}/{city}, eg /America/Argentina/Buenos_Aires
async fn from_city(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
) -> impl Responder {
    let (region, location, city) = path.into_inner();
    respond_for_zone(&state, &format!("{}/{}/{}", region, location, city))
}

/// Coverage of the dial by the current catalog
async fn coverage(state: web::Data<AppState>) -> impl Responder {
    let report = CoverageReport::build(&state.matcher, state.catalog.entries());
    HttpResponse::Ok()
        .content_type(HTML)
        .body(render_coverage_page(&report))
}

fn respond_for_zone(state: &AppState, zone: &str) -> HttpResponse {
    match now_in_timezone(zone) {
        Ok(time) => respond_with_match(state, time),
        Err(e) => {
            tracing::info!("{}", e);
            HttpResponse::NotFound()
                .content_type(HTML)
                .body(render_message_page(&e.to_string()))
        }
    }
}

fn respond_with_match(state: &AppState, time: WallTime) -> HttpResponse {
    let mut rng = rand::thread_rng();
    let target = TargetAngles::from_wall_time(time);

    match state
        .matcher
        .find_matching_entry(state.catalog.entries(), &target, &mut rng)
    {
        Some(entry) => {
            tracing::debug!("Matched {} for {}", entry.id, format_time(time));
            HttpResponse::Ok()
                .content_type(HTML)
                .body(bun_page(state, entry, time, &mut rng))
        }
        None => {
            tracing::info!("No matching buns at {}", format_time(time));
            HttpResponse::Ok()
                .content_type(HTML)
                .body(render_message_page(&format!(
                    "No matching buns at {} :(",
                    format_time(time)
                )))
        }
    }
}

fn bun_page(state: &AppState, entry: &Entry, time: WallTime, rng: &mut impl Rng) -> String {
    render_bun_page(&BunPage {
        entry,
        name: entry.display_name(rng, &state.site.fallback_names),
        time: format_time(time),
    })
}
