use crate::config::ListingSettings;
use crate::database::Catalog;
use crate::errors::CatalogError;
use crate::models::listing::{CatalogPage, PageRequest};
use crate::pagination::{self, PageWindow};

/// Builds one page of the show listing.
///
/// Page numbers outside the catalog are not rejected: the window slides back
/// into range and the catalog simply returns no rows for the page.
pub async fn list_shows(
    catalog: &dyn Catalog,
    settings: &ListingSettings,
    request: PageRequest,
) -> Result<CatalogPage, CatalogError> {
    let total_count = catalog.count().await?;
    let total_pages = pagination::total_pages(total_count, settings.page_size)?;
    let window = PageWindow::compute(request.page_number, total_pages, settings.window_size)?;
    let offset = pagination::page_offset(request.page_number, settings.page_size);

    tracing::debug!(
        "Listing page {} of {} ordered by {} {} (offset {}, window {}..={})",
        request.page_number,
        total_pages,
        request.order_by,
        request.order,
        offset,
        window.start,
        window.end
    );

    // Pages below 1 sit before the first row
    let items = if offset < 0 {
        Vec::new()
    } else {
        catalog
            .list_page(request.order_by, request.order, settings.page_size, offset)
            .await?
    };

    Ok(CatalogPage {
        items,
        total_count,
        total_pages,
        window,
        page_number: request.page_number,
        order_by: request.order_by,
        order: request.order,
    })
}
