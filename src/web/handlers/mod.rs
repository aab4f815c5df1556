pub mod article;
pub mod history;
pub mod home;
pub mod pages;

use actix_web::web;

/// Registers every page route. The 404 page is installed separately as the
/// app's default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    home::configure(cfg);
    history::configure(cfg);
    article::configure(cfg);
    pages::configure(cfg);
}
