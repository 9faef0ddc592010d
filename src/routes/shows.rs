use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::errors::show::ShowError;
use crate::models::actors::CastPage;
use crate::models::listing::PageRequest;
use crate::models::shows::{CAST_CHARACTER_LIMIT, DETAIL_CHARACTER_LIMIT, ShowPage};
use crate::routes::html;
use crate::{AppState, errors::CatalogError, listing};

/// Every URL shape of the show listing. Missing segments take the defaults
/// of [`PageRequest`].
const LISTING_PATHS: [&str; 8] = [
    "/shows",
    "/shows/{page:[0-9]+}",
    "/shows/most-rated",
    "/shows/most-rated/{page:[0-9]+}",
    "/shows/order-by-{order_by:[A-Za-z_]+}",
    "/shows/order-by-{order_by:[A-Za-z_]+}-{order:[A-Za-z]+}",
    "/shows/order-by-{order_by:[A-Za-z_]+}/{page:[0-9]+}",
    "/shows/order-by-{order_by:[A-Za-z_]+}-{order:[A-Za-z]+}/{page:[0-9]+}",
];

async fn shows_list(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, CatalogError> {
    let segments = req.match_info();
    let request = PageRequest::from_segments(
        segments.get("page"),
        segments.get("order_by"),
        segments.get("order"),
    )?;

    let page = listing::list_shows(state.catalog.as_ref(), &state.listing, request).await?;

    Ok(html(state.renderer.shows(&page)))
}

#[get("/show/{id}")]
async fn show_get(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();
    let catalog = state.catalog.as_ref();

    let show = catalog
        .get_show(id)
        .await?
        .ok_or(ShowError::NotFound(id))?;
    let characters = catalog.get_characters(id, DETAIL_CHARACTER_LIMIT).await?;
    let seasons = catalog.get_seasons(id).await?;

    let page = ShowPage::new(show, &characters, seasons);

    Ok(html(state.renderer.show(&page)))
}

#[get("/show/{id}/actors")]
async fn show_actors(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();
    let catalog = state.catalog.as_ref();

    let show = catalog
        .get_show(id)
        .await?
        .ok_or(ShowError::NotFound(id))?;
    let characters = catalog.get_characters(id, CAST_CHARACTER_LIMIT).await?;

    let page = CastPage::new(show, characters);

    Ok(html(state.renderer.actors(&page)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(LISTING_PATHS).route(web::get().to(shows_list)));
    cfg.service(show_get);
    cfg.service(show_actors);
}
