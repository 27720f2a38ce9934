use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{EmailAddress, PersonName, TypeConstraintError};
use crate::forms::{first_message, trim};

const AUTH_FIELDS: &[&str] = &["name", "email", "password"];

#[derive(Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(email(message = "Invalid credentials"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid credentials"))]
    pub password: String,
}

/// Credentials accepted by the login stub. The password is only checked for
/// presence and is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginFormPayload {
    pub email: EmailAddress,
}

#[derive(Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterFormPayload {
    pub name: PersonName,
    pub email: EmailAddress,
}

#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid user data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AuthFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, AUTH_FIELDS))
    }
}

impl From<TypeConstraintError> for AuthFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<LoginForm> for LoginFormPayload {
    type Error = AuthFormError;

    fn try_from(value: LoginForm) -> Result<Self, Self::Error> {
        let value = LoginForm {
            email: trim(value.email),
            password: trim(value.password),
        };
        value.validate()?;
        Ok(Self {
            email: EmailAddress::new(value.email)?,
        })
    }
}

impl TryFrom<RegisterForm> for RegisterFormPayload {
    type Error = AuthFormError;

    fn try_from(value: RegisterForm) -> Result<Self, Self::Error> {
        let value = RegisterForm {
            name: trim(value.name),
            email: trim(value.email),
            password: trim(value.password),
        };
        value.validate()?;
        Ok(Self {
            name: PersonName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
        })
    }
}
