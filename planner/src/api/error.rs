use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Please enter both a start and an end location.")]
    EmptyField,
    #[error("missing navigation parameter '{0}'")]
    MissingParam(&'static str),
    #[error("Failed to fetch routes.")]
    SearchFailed,
    #[error("no location found for '{0}'")]
    PlaceNotFound(String),
    #[error("no route between the resolved places")]
    Unroutable,
    #[error("route data is malformed: {0}")]
    Data(#[from] serde_json::Error),
    #[error("could not build navigation link: {0}")]
    Query(#[from] serde_qs::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyField | ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::PlaceNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unroutable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SearchFailed | ApiError::Data(_) | ApiError::Query(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
