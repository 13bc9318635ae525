use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use docsim_common::DocSimError;
use std::fmt;

use crate::types::ErrorResponse;

/// HTTP wrapper around `DocSimError`
#[derive(Debug)]
pub struct ApiError(pub DocSimError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DocSimError> for ApiError {
    fn from(err: DocSimError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}
