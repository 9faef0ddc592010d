use actix_web::{error, http::StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error("Show {0} was not found")]
    NotFound(i32),

    #[error("Unknown sort field {0}")]
    InvalidSortField(String),

    #[error("Unknown sort direction {0}")]
    InvalidSortDirection(String),

    #[error("Invalid page number {0}")]
    InvalidPageNumber(String),
}

impl error::ResponseError for ShowError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShowError::NotFound(_) => StatusCode::NOT_FOUND,
            ShowError::InvalidSortField(_)
            | ShowError::InvalidSortDirection(_)
            | ShowError::InvalidPageNumber(_) => StatusCode::BAD_REQUEST,
        }
    }
}
