#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in .env file")]
    Missing(&'static str),

    #[error("{key} must be an integer, got {value:?}")]
    NotAnInteger { key: &'static str, value: String },

    #[error(transparent)]
    Pagination(#[from] super::pagination::PaginationError),
}
