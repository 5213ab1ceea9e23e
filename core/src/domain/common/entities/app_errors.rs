use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Patient {name} is missing required data: {}", fields.join(", "))]
    MissingPatientData { name: String, fields: Vec<String> },

    #[error("No foods available in database. Please import foods first.")]
    EmptyFoodCatalog,

    #[error("No compatible foods left after applying patient restrictions")]
    NoCompatibleFoods,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("A resource with the same identity already exists")]
    Conflict,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}
