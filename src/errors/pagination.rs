use actix_web::{error, http::StatusCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Total page count must be at least 1, got {0}")]
    InvalidTotalPages(i64),

    #[error("Shown page numbers must be a positive odd number, got {0}")]
    InvalidWindowSize(i64),

    #[error("Page size must be at least 1, got {0}")]
    InvalidPageSize(i64),
}

impl PaginationError {
    /// Whether the error comes from the configured listing settings rather than the request
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PaginationError::InvalidWindowSize(_) | PaginationError::InvalidPageSize(_)
        )
    }
}

impl error::ResponseError for PaginationError {
    fn status_code(&self) -> StatusCode {
        match self {
            PaginationError::InvalidTotalPages(_) => StatusCode::BAD_REQUEST,
            PaginationError::InvalidWindowSize(_) | PaginationError::InvalidPageSize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
