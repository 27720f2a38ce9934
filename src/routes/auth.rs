use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::user::User;
use crate::forms::auth::{LoginForm, LoginFormPayload, RegisterForm, RegisterFormPayload};
use crate::models::auth::{AuthenticatedUser, SESSION_USER_KEY};
use crate::models::config::ServerConfig;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::auth::{login as login_service, register as register_service};

fn start_session(session: &Session, user: User) -> HttpResponse {
    session.renew();
    match session.insert(SESSION_USER_KEY, &user) {
        Ok(()) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::error!("Failed to store user in session: {e}");
            error_response(ServiceError::Internal)
        }
    }
}

#[post("/login")]
pub async fn login(
    session: Session,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    let payload: LoginFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match login_service(payload, server_config.auth_latency()).await {
        Ok(user) => start_session(&session, user),
        Err(err) => error_response(err),
    }
}

#[post("/register")]
pub async fn register(
    session: Session,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<RegisterForm>,
) -> impl Responder {
    let payload: RegisterFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match register_service(payload, server_config.auth_latency()).await {
        Ok(user) => start_session(&session, user),
        Err(err) => error_response(err),
    }
}

#[post("/logout")]
pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    HttpResponse::NoContent().finish()
}

#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(user.0)
}
