use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum CustomError {
    #[display("user directory is unavailable")]
    UpstreamUnavailable,
    #[display("timeout occurred")]
    Timeout,
    #[display("user directory responded with status {status}")]
    UpstreamStatus { status: u16 },
    #[display("user directory returned a malformed body")]
    MalformedUpstreamBody,
    #[display("user directory response has no users")]
    MissingUsers,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            CustomError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            CustomError::UpstreamStatus { .. }
            | CustomError::MalformedUpstreamBody
            | CustomError::MissingUsers => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
