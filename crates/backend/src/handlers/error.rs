use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::{ApiErrorBody, ApiErrorKind};

use crate::domain::a001_supplier::service::ServiceError;
use crate::shared::data::GatewayError;

/// Ошибка handler-а: HTTP статус + JSON тело `{kind, message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody::new(kind, message),
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(e: GatewayError) -> Self {
        let (status, kind) = match &e {
            GatewayError::Unauthorized(_) => (StatusCode::FORBIDDEN, ApiErrorKind::Unauthorized),
            GatewayError::Constraint(_) => (StatusCode::CONFLICT, ApiErrorKind::Constraint),
            GatewayError::Network(_) | GatewayError::Malformed(_) => {
                (StatusCode::BAD_GATEWAY, ApiErrorKind::Network)
            }
            GatewayError::InvalidQuery(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ApiErrorKind::Internal)
            }
        };
        tracing::error!("Store error: {}", e);
        Self::new(status, kind, e.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => {
                Self::new(StatusCode::BAD_REQUEST, ApiErrorKind::Validation, v.to_string())
            }
            ServiceError::InvalidId(_) => {
                Self::new(StatusCode::BAD_REQUEST, ApiErrorKind::BadRequest, e.to_string())
            }
            ServiceError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, ApiErrorKind::NotFound, e.to_string())
            }
            ServiceError::AccessDenied => {
                Self::new(StatusCode::FORBIDDEN, ApiErrorKind::Unauthorized, e.to_string())
            }
            ServiceError::Gateway(g) => g.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_supplier::aggregate::SupplierValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(GatewayError::Unauthorized("x".into())),
                StatusCode::FORBIDDEN,
                ApiErrorKind::Unauthorized,
            ),
            (
                ApiError::from(GatewayError::Constraint("x".into())),
                StatusCode::CONFLICT,
                ApiErrorKind::Constraint,
            ),
            (
                ApiError::from(GatewayError::Malformed("x".into())),
                StatusCode::BAD_GATEWAY,
                ApiErrorKind::Network,
            ),
            (
                ApiError::from(ServiceError::Validation(SupplierValidationError::EmptyName)),
                StatusCode::BAD_REQUEST,
                ApiErrorKind::Validation,
            ),
            (
                ApiError::from(ServiceError::NotFound("id".into())),
                StatusCode::NOT_FOUND,
                ApiErrorKind::NotFound,
            ),
            (
                ApiError::from(ServiceError::Gateway(GatewayError::Network("down".into()))),
                StatusCode::BAD_GATEWAY,
                ApiErrorKind::Network,
            ),
        ];
        for (error, status, kind) in cases {
            assert_eq!(error.status, status);
            assert_eq!(error.body.kind, kind);
        }
    }
}
