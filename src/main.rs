use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use series_catalog::{
    AppState,
    config::Settings,
    database::PgCatalog,
    routes::{self, not_found::not_found},
    views::html::HtmlRenderer,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    tracing::info!(
        "Listing {} shows per page with {} page numbers shown",
        settings.listing.page_size,
        settings.listing.window_size
    );

    let catalog = PgCatalog::connect(&settings.database_url).await?;

    let state = web::Data::new(AppState {
        catalog: Arc::new(catalog),
        renderer: Arc::new(HtmlRenderer),
        listing: settings.listing,
    });

    tracing::info!("Serving the catalog on {}", settings.server_url);

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes::config)
            .default_service(web::route().to(not_found))
    })
    .bind(&settings.server_url)?
    .run();

    http_server.await?;

    Ok(())
}
