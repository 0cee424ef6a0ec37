use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("An internal error occured. Please try again later")]
    InternalError,
    #[display("Id must be an integer")]
    InvalidId,
    #[display("Page must be an integer")]
    InvalidPage,
    #[display("Page must be a positive integer")]
    PageOutOfRange,
    #[display("{_0}")]
    InvalidBody(#[error(not(source))] String),
    #[display("{_0}")]
    UserRejected(#[error(not(source))] String),
    #[display("User does not exist")]
    UserDoesNotExist,
}

impl error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::InvalidPage => StatusCode::BAD_REQUEST,
            Self::PageOutOfRange => StatusCode::BAD_REQUEST,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::UserRejected(_) => StatusCode::BAD_REQUEST,
            Self::UserDoesNotExist => StatusCode::NOT_FOUND,
        }
    }
}
