use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request carries no logged-in user.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Submitted form data failed validation.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
