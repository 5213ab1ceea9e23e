use aahaara_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    /// Rendered in the `{success, error}` shape under `status`.
    #[error("{error}")]
    Failure {
        status: StatusCode,
        error: String,
        missing_fields: Option<Vec<String>>,
    },

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidToken | CoreError::TokenExpired => {
                ApiError::Unauthorized(error.to_string())
            }
            CoreError::MissingPatientData { ref fields, .. } => ApiError::Failure {
                status: StatusCode::BAD_REQUEST,
                missing_fields: Some(fields.clone()),
                error: error.to_string(),
            },
            CoreError::EmptyFoodCatalog | CoreError::NoCompatibleFoods => ApiError::Failure {
                status: StatusCode::BAD_REQUEST,
                error: error.to_string(),
                missing_fields: None,
            },
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::Conflict => ApiError::Conflict(error.to_string()),
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::ServiceUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl ApiError {
    /// Converts `error` into the `{success:false, error}` shape, keeping the
    /// status it would get as a regular [`ApiError`].
    pub fn failure(error: CoreError) -> Self {
        let message = error.to_string();

        match ApiError::from(error) {
            failure @ ApiError::Failure { .. } => failure,
            other => ApiError::Failure {
                status: other.parts().0,
                error: message,
                missing_fields: None,
            },
        }
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE_ENTITY")
            }
            ApiError::Failure { status, .. } => (*status, "E_FAILURE"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        }

        match self {
            ApiError::Failure {
                error,
                missing_fields,
                ..
            } => (
                status,
                Json(FailureResponse {
                    success: false,
                    error,
                    missing_fields,
                }),
            )
                .into_response(),
            other => (
                status,
                Json(ApiErrorResponse {
                    code: code.to_string(),
                    message: other.to_string(),
                    status: status.as_u16(),
                }),
            )
                .into_response(),
        }
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::UnprocessableEntity(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_patient_data_keeps_the_field_list() {
        let error = ApiError::from(CoreError::MissingPatientData {
            name: "Asha".to_string(),
            fields: vec!["height".to_string(), "age".to_string()],
        });

        match error {
            ApiError::Failure {
                status,
                error,
                missing_fields,
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert!(error.contains("Asha"));
                assert_eq!(
                    missing_fields,
                    Some(vec!["height".to_string(), "age".to_string()])
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_a_bad_request() {
        let response = ApiError::from(CoreError::EmptyFoodCatalog).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn failure_keeps_the_missing_field_list() {
        let response = ApiError::failure(CoreError::MissingPatientData {
            name: "Asha".to_string(),
            fields: vec!["weight".to_string()],
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["missing_fields"][0], "weight");
    }

    #[tokio::test]
    async fn regular_errors_keep_the_code_body() {
        let body = body_json(ApiError::from(CoreError::NotFound).into_response()).await;
        assert_eq!(body["code"], "E_NOT_FOUND");
        assert_eq!(body["status"], 404);
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (CoreError::Invalid("bad".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::Conflict, StatusCode::CONFLICT),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).into_response().status(), status);
        }
    }
}
