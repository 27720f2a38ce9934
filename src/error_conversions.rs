//! Error conversion glue between the form and service layers.
//!
//! Form errors carry user-facing messages, so they are surfaced verbatim as
//! `ServiceError::Form`.

use crate::forms::auth::AuthFormError;
use crate::forms::bids::SubmitBidFormError;
use crate::forms::tenders::{CreateTenderFormError, UpdateTenderFormError};
use crate::services::ServiceError;

impl From<CreateTenderFormError> for ServiceError {
    fn from(val: CreateTenderFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateTenderFormError> for ServiceError {
    fn from(val: UpdateTenderFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SubmitBidFormError> for ServiceError {
    fn from(val: SubmitBidFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AuthFormError> for ServiceError {
    fn from(val: AuthFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
