use actix_web::{error, http::StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Actor {0} was not found")]
    NotFound(i32),

    #[error("Invalid actor name")]
    InvalidName,
}

impl error::ResponseError for ActorError {
    fn status_code(&self) -> StatusCode {
        match self {
            ActorError::NotFound(_) => StatusCode::NOT_FOUND,
            ActorError::InvalidName => StatusCode::BAD_REQUEST,
        }
    }
}
