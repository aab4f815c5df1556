use actix_web::{Responder, get, web};
use futures_util::future::join;

use unscripted::models::{Article, HistoryEvent};
use unscripted::services::dates::format_long_opt;
use unscripted::services::seo::{self, FALLBACK_IMAGE};
use unscripted::services::{Placeholder, Reveal, RichText, reveal::PAGE_SIZE};
use unscripted::store::FetchResult;

use crate::web::forms::HomeQuery;
use crate::web::helpers::render_state;
use crate::web::state::AppState;
use crate::web::templates::{
    ArticleCard, ArticleGrid, ArticleListView, HistoryCard, HistoryCardView, HomeTemplate,
    ImageView,
};

const HISTORY_FAILED: &str = "Unable to load today's history. Please try again later.";
const ARTICLES_FAILED: &str = "Failed to fetch articles. Please try again later.";
const HISTORY_FALLBACK_TITLE: &str = "On This Day in History";

#[get("/")]
pub async fn home(state: web::Data<AppState>, query: web::Query<HomeQuery>) -> impl Responder {
    let store = &state.store;
    store.attach_today_history(query.history_ticket());
    store.attach_latest_articles(query.articles_ticket());

    let wait = state.settings.render_wait;
    let (history, articles) = join(
        store.history().settled(wait),
        store.articles().settled(wait),
    )
    .await;

    let reveal = Reveal::from_query(query.shown.as_deref());
    let pending = history.is_pending() || articles.is_pending();

    let visible = articles
        .data()
        .map(|list| reveal.visible(list))
        .unwrap_or_default();
    let meta = seo::home_meta(&state.settings.site_url, visible);

    render_state(
        HomeTemplate {
            meta,
            refresh: state.refresh_if(pending, || {
                format!(
                    "?shown={}&history={}&articles={}",
                    reveal.cursor(),
                    store.history().ticket(),
                    store.articles().ticket()
                )
            }),
            history: history_view(&history),
            articles: article_list_view(&articles, reveal),
        },
        pending,
    )
}

fn history_view(result: &FetchResult<HistoryEvent>) -> HistoryCardView {
    match result {
        FetchResult::Pending => HistoryCardView::Loading(Placeholder::history_card()),
        FetchResult::Failure(_) => HistoryCardView::Failed(HISTORY_FAILED.to_string()),
        FetchResult::Success(event) => HistoryCardView::Ready(history_card(event)),
    }
}

pub(crate) fn history_card(event: &HistoryEvent) -> HistoryCard {
    let title = if event.title.trim().is_empty() {
        HISTORY_FALLBACK_TITLE.to_string()
    } else {
        event.title.clone()
    };
    let image = event.first_image().map(|img| ImageView {
        url: img.url.clone(),
        alt: img
            .alt
            .clone()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or_else(|| format!("Image for {}", event.title)),
    });

    HistoryCard {
        title,
        date: format_long_opt(event.display_date()),
        image,
        preview: event
            .preview()
            .map(|lines| RichText::trusted(lines).balanced()),
    }
}

fn article_list_view(result: &FetchResult<Vec<Article>>, reveal: Reveal) -> ArticleListView {
    match result {
        FetchResult::Pending => {
            ArticleListView::Loading(Placeholder::repeat(Placeholder::article_card, PAGE_SIZE))
        }
        FetchResult::Failure(_) => ArticleListView::Failed(ARTICLES_FAILED.to_string()),
        FetchResult::Success(articles) if articles.is_empty() => ArticleListView::Empty,
        FetchResult::Success(articles) => ArticleListView::Ready(ArticleGrid {
            cards: reveal.visible(articles).iter().map(article_card).collect(),
            more_href: reveal
                .has_more(articles.len())
                .then(|| reveal_href(reveal.more())),
            less_href: reveal.has_less().then(|| reveal_href(reveal.less())),
        }),
    }
}

fn reveal_href(reveal: Reveal) -> String {
    format!("/?shown={}#latest-articles-heading", reveal.cursor())
}

pub(crate) fn article_card(article: &Article) -> ArticleCard {
    ArticleCard {
        href: article.link_slug().map(|slug| format!("/article/{slug}")),
        title: article.title.clone(),
        excerpt: article.excerpt().map(str::to_string),
        image_url: article
            .primary_image_url()
            .unwrap_or(FALLBACK_IMAGE)
            .to_string(),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
