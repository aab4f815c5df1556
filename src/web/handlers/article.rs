use actix_web::{Responder, get, web};

use unscripted::models::Article;
use unscripted::services::dates::format_long_opt;
use unscripted::services::{Placeholder, RichText, seo};
use unscripted::store::FetchResult;

use crate::web::forms::DetailQuery;
use crate::web::helpers::render_state;
use crate::web::state::AppState;
use crate::web::templates::{ArticleBodyView, ArticleDetail, ArticleTemplate, ImageView};

const ARTICLE_FAILED: &str = "Unable to load this article. Please try again later.";

#[get("/article/{slug}")]
pub async fn article_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> impl Responder {
    let slug = path.into_inner();
    let controller = state.store.load_article(&slug, query.ticket());
    let result = controller.settled(state.settings.render_wait).await;

    let pending = result.is_pending();
    let meta = seo::article_meta(&state.settings.site_url, &slug, result.data());
    let body = match result {
        FetchResult::Pending => ArticleBodyView::Loading(Placeholder::article_detail()),
        FetchResult::Failure(_) => ArticleBodyView::Failed(ARTICLE_FAILED.to_string()),
        FetchResult::Success(article) => ArticleBodyView::Ready(detail(article)),
    };

    render_state(
        ArticleTemplate {
            meta,
            refresh: state.refresh_if(pending, || format!("?wait={}", controller.ticket())),
            body,
        },
        pending,
    )
}

fn detail(article: Article) -> ArticleDetail {
    let image = article.primary_image_url().map(|url| ImageView {
        url: url.to_string(),
        alt: article.title.clone(),
    });
    let byline = match article.author() {
        Some(author) => format!("By {author}"),
        None => "By Unknown".to_string(),
    };

    ArticleDetail {
        byline,
        date: format_long_opt(article.created_at.as_deref()),
        image,
        image_caption: article.image_caption().map(str::to_string),
        title: article.title,
        content: RichText::trusted(article.content),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(article_detail);
}
