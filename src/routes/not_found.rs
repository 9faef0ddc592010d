use crate::errors::CatalogError;

pub async fn not_found() -> Result<actix_web::HttpResponse, CatalogError> {
    Err(CatalogError::NotFound)
}
