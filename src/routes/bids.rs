use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::bids::{SubmitBidForm, SubmitBidFormPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::bids::{recent_bids as recent_bids_service, submit_bid as submit_bid_service};
use crate::services::tenders::list_tender_bids as list_tender_bids_service;

#[get("/tenders/{tender_id}/bids")]
pub async fn list_tender_bids(
    tender_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match list_tender_bids_service(&tender_id, repo.get_ref()).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(err) => error_response(err),
    }
}

#[post("/tenders/{tender_id}/bids")]
pub async fn submit_bid(
    tender_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<SubmitBidForm>,
) -> impl Responder {
    let payload: SubmitBidFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match submit_bid_service(&tender_id, payload, repo.get_ref()).await {
        Ok(bid) => HttpResponse::Created().json(bid),
        Err(err) => error_response(err),
    }
}

#[get("/bids/recent")]
pub async fn recent_bids(
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match recent_bids_service(repo.get_ref()).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(err) => error_response(err),
    }
}
