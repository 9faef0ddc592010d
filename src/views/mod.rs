pub mod html;

use crate::database::{actor, show};
use crate::models::actors::CastPage;
use crate::models::listing::CatalogPage;
use crate::models::shows::ShowPage;

/// Turns catalog data into response bodies
pub trait Renderer: Send + Sync {
    fn index(&self, shows: &[show::Model]) -> String;

    fn shows(&self, page: &CatalogPage) -> String;

    fn show(&self, page: &ShowPage) -> String;

    fn actors(&self, page: &CastPage) -> String;

    fn actor(&self, actor: &actor::Model) -> String;
}
