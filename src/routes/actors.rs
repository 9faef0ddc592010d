use actix_web::{HttpResponse, get, post, web};

use crate::errors::actor::ActorError;
use crate::models::actors::ActorForm;
use crate::routes::html;
use crate::utils::validation;
use crate::{AppState, errors::CatalogError};

#[get("/actor/{id}")]
async fn actor_get(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();

    let actor = state
        .catalog
        .get_actor(id)
        .await?
        .ok_or(ActorError::NotFound(id))?;

    Ok(html(state.renderer.actor(&actor)))
}

#[post("/actor/{id}")]
async fn actor_update(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    form: web::Form<ActorForm>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();
    let form = form.into_inner();

    let name = validation::normalize_actor_name(&form.name).ok_or(ActorError::InvalidName)?;

    let actor = state
        .catalog
        .update_actor_name(id, &name)
        .await?
        .ok_or(ActorError::NotFound(id))?;
    tracing::info!("Renamed actor {} to {}", actor.id, actor.name);

    Ok(html(state.renderer.actor(&actor)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(actor_get);
    cfg.service(actor_update);
}
