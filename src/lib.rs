use std::sync::Arc;

use crate::config::ListingSettings;
use crate::database::Catalog;
use crate::views::Renderer;

pub mod config;
pub mod database;
pub mod errors;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod utils;
pub mod views;

pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub renderer: Arc<dyn Renderer>,
    pub listing: ListingSettings,
}
