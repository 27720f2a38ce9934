use std::future::{Ready, ready};

use actix_session::SessionExt;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::user::User;
use crate::routes::error_response;
use crate::services::ServiceError;

/// Session key holding the logged-in [`User`].
pub const SESSION_USER_KEY: &str = "user";

/// Extractor resolving the user stored in the cookie session.
///
/// Requests without a session user are rejected with `401 Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = match req.get_session().get::<User>(SESSION_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Failed to read user from session: {e}");
                None
            }
        };

        ready(match user {
            Some(user) => Ok(AuthenticatedUser(user)),
            None => Err(InternalError::from_response(
                "unauthorized",
                error_response(ServiceError::Unauthorized),
            )
            .into()),
        })
    }
}
