use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod auth;
pub mod bids;
pub mod dashboard;
pub mod tenders;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Maps a service failure onto its HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorDto::new(err.to_string()))
        }
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(ErrorDto::new(err.to_string())),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorDto::new(message)),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorDto::new(err.to_string()))
        }
    }
}

/// Rejects malformed JSON bodies with the same error shape as form failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorDto::new(message)))
            .into()
    })
}

/// Registers every route of the console.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/auth")
                .service(auth::login)
                .service(auth::register)
                .service(auth::logout)
                .service(auth::me),
        )
        .service(
            web::scope("/api")
                .service(tenders::list_tenders)
                .service(tenders::create_tender)
                .service(tenders::show_tender)
                .service(tenders::update_tender)
                .service(tenders::delete_tender)
                .service(bids::list_tender_bids)
                .service(bids::submit_bid)
                .service(bids::recent_bids)
                .service(dashboard::stats)
                .service(dashboard::recent_tenders),
        );
}
