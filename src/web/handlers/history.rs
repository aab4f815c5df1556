use actix_web::{HttpRequest, Responder, get, web};

use unscripted::models::HistoryEvent;
use unscripted::services::dates::format_long_opt;
use unscripted::services::{Placeholder, RichText, seo};
use unscripted::store::FetchResult;

use crate::web::forms::DetailQuery;
use crate::web::helpers::render_state;
use crate::web::state::AppState;
use crate::web::templates::{
    HistoryBodyView, HistoryDetail, HistoryTemplate, ImageView, RelatedLink,
};

const HISTORY_FAILED: &str = "Failed to load event data.";

#[get("/today-history")]
pub async fn today_history(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<DetailQuery>,
) -> impl Responder {
    let controller = state.store.load_today_history(query.ticket());
    let result = controller.settled(state.settings.render_wait).await;

    let pending = result.is_pending();
    let meta = seo::history_meta(&state.settings.site_url, req.path(), result.data());
    let body = match result {
        FetchResult::Pending => HistoryBodyView::Loading(Placeholder::history_detail()),
        FetchResult::Failure(_) => HistoryBodyView::Failed(HISTORY_FAILED.to_string()),
        FetchResult::Success(event) => HistoryBodyView::Ready(detail(event)),
    };

    render_state(
        HistoryTemplate {
            meta,
            refresh: state.refresh_if(pending, || format!("?wait={}", controller.ticket())),
            body,
        },
        pending,
    )
}

fn detail(event: HistoryEvent) -> HistoryDetail {
    let images = event
        .images
        .iter()
        .filter(|img| img.has_url())
        .enumerate()
        .map(|(idx, img)| ImageView {
            url: img.url.clone(),
            alt: img
                .alt
                .clone()
                .filter(|alt| !alt.trim().is_empty())
                .unwrap_or_else(|| format!("Image {} for {}", idx + 1, event.title)),
        })
        .collect();

    let related = event
        .related_articles
        .iter()
        .map(|link| RelatedLink {
            href: format!("/history/{}", link.id),
            title: link.title.clone(),
            date: format_long_opt(link.created_at.as_deref()),
        })
        .collect();

    HistoryDetail {
        date: format_long_opt(event.created_at.as_deref()),
        summary: event.summary().map(str::to_string),
        images,
        related,
        title: event.title,
        content: RichText::trusted(event.content),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(today_history);
}
