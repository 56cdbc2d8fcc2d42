//! Service-level error type and its HTTP mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(format!("{entity} not found"))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Resource not found".to_string()),
            RepositoryError::ValidationError(msg) => ServiceError::BadRequest(msg),
            RepositoryError::ConstraintViolation(msg) | RepositoryError::InvalidReference(msg) => {
                ServiceError::Conflict(msg)
            }
            RepositoryError::DatabaseError(_)
            | RepositoryError::ConnectionError(_)
            | RepositoryError::Unexpected(_) => ServiceError::Internal(err.to_string()),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::BadRequest(err.to_string())
    }
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> Self {
        ServiceError::Internal(format!("CSV error: {err}"))
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {self}");
        }

        HttpResponse::build(status).json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_status_codes() {
        let cases = [
            (RepositoryError::NotFound, StatusCode::NOT_FOUND),
            (
                RepositoryError::ValidationError("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::ConstraintViolation("dup".into()),
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::InvalidReference("no company".into()),
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::ConnectionError("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ServiceError::from(err).status_code(), status);
        }
    }

    #[test]
    fn type_errors_are_bad_requests() {
        let err = ServiceError::from(TypeConstraintError::InvalidEmail);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid email address");
    }

    #[test]
    fn not_found_helper_names_entity() {
        assert_eq!(
            ServiceError::not_found("Contact").to_string(),
            "Contact not found"
        );
    }
}
