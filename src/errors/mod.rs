pub mod actor;
pub mod config;
pub mod pagination;
pub mod show;

use actix_web::{
    HttpResponse,
    body::BoxBody,
    error::{ResponseError, UrlencodedError},
    http::{StatusCode, header::ContentType},
};

use crate::database::DatabaseError;
use crate::views::html;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Resource not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Pagination(#[from] pagination::PaginationError),

    #[error(transparent)]
    Show(#[from] show::ShowError),

    #[error(transparent)]
    Actor(#[from] actor::ActorError),

    #[error(transparent)]
    Form(#[from] UrlencodedError),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Pagination(e) => e.status_code(),
            CatalogError::Show(e) => e.status_code(),
            CatalogError::Actor(e) => e.status_code(),
            CatalogError::Form(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();

        // Never leak driver messages into the page
        let message = match self {
            CatalogError::Database(..) => {
                tracing::error!("Catalog query failed: {}", self);
                "Something went wrong while reading the catalog".to_owned()
            }
            CatalogError::Pagination(e) if e.is_configuration() => {
                tracing::error!("Listing is misconfigured: {}", e);
                "Something went wrong while paginating the catalog".to_owned()
            }
            _ => self.to_string(),
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html::error_page(status, &message))
    }
}
