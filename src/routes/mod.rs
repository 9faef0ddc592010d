pub mod actors;
pub mod not_found;
pub mod shows;

#[cfg(test)]
pub(crate) mod fixtures;

use actix_web::{HttpResponse, get, http::header::ContentType, web};

use crate::{AppState, errors::CatalogError};

#[get("/")]
pub async fn index_get(state: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    let shows = state.catalog.all_shows().await?;

    Ok(html(state.renderer.index(&shows)))
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default().error_handler(|err, _req| CatalogError::from(err).into()),
    );

    cfg.configure(shows::config);
    cfg.configure(actors::config);
    cfg.service(index_get);
}
