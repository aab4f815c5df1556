//! Static pages: the vision statement, "launching soon" placeholders and 404.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use unscripted::services::PageMeta;

use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{ComingSoonTemplate, NotFoundTemplate, VisionTemplate};

fn canonical(state: &AppState, req: &HttpRequest) -> String {
    format!("{}{}", state.settings.site_url, req.path())
}

#[get("/vision")]
pub async fn vision(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    render(VisionTemplate {
        meta: PageMeta::new(
            "Our Vision - Unscripted India",
            "Documentary excellence, reviving historical truths and celebrating the cultural diversity of India.",
            canonical(&state, &req),
        ),
        refresh: None,
    })
}

fn coming_soon(state: &AppState, req: &HttpRequest, section_name: &str) -> HttpResponse {
    render(ComingSoonTemplate {
        meta: PageMeta::new(
            format!("{section_name} - Unscripted India"),
            &format!("{section_name} is launching soon on Unscripted India."),
            canonical(state, req),
        ),
        refresh: None,
        section_name: section_name.to_string(),
    })
}

#[get("/contact")]
pub async fn contact(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    coming_soon(&state, &req, "Contact")
}

/// Related-article links point here; the archive itself is not published yet.
#[get("/history/{id}")]
pub async fn history_archive(
    state: web::Data<AppState>,
    req: HttpRequest,
    _id: web::Path<String>,
) -> impl Responder {
    coming_soon(&state, &req, "History Archive")
}

pub async fn not_found(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            meta: PageMeta::new(
                "Page not found - Unscripted India",
                "The page you're looking for doesn't exist or has been moved.",
                canonical(&state, &req),
            ),
            refresh: None,
        },
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(vision)
        .service(contact)
        .service(history_archive);
}
