mod blueprints;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{db::StoreError, models::ApiResponse};

pub fn config(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(actix_web::web::scope("/v1").configure(blueprints::config));
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Persistence(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            StoreError::NotFound(message) => ApiResponse::not_found(message.as_str()),
            StoreError::Persistence(message) => ApiResponse::bad_request(message.as_str()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
