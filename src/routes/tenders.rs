use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::tenders::DeletedDto;
use crate::forms::tenders::{
    CreateTenderForm, CreateTenderFormPayload, UpdateTenderForm, UpdateTenderFormPayload,
};
use crate::models::auth::AuthenticatedUser;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::tenders::{
    TenderListParams, create_tender as create_tender_service,
    delete_tender as delete_tender_service, get_tender as get_tender_service,
    list_tenders as list_tenders_service, update_tender as update_tender_service,
};

#[get("/tenders")]
pub async fn list_tenders(
    _user: AuthenticatedUser,
    params: web::Query<TenderListParams>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match list_tenders_service(params.into_inner(), repo.get_ref()).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => error_response(err),
    }
}

#[post("/tenders")]
pub async fn create_tender(
    user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<CreateTenderForm>,
) -> impl Responder {
    let payload: CreateTenderFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match create_tender_service(payload, &user.0, repo.get_ref()).await {
        Ok(tender) => HttpResponse::Created().json(tender),
        Err(err) => error_response(err),
    }
}

#[get("/tenders/{tender_id}")]
pub async fn show_tender(
    tender_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match get_tender_service(&tender_id, repo.get_ref()).await {
        Ok(tender) => HttpResponse::Ok().json(tender),
        Err(err) => error_response(err),
    }
}

#[put("/tenders/{tender_id}")]
pub async fn update_tender(
    tender_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    web::Json(form): web::Json<UpdateTenderForm>,
) -> impl Responder {
    let payload: UpdateTenderFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match update_tender_service(&tender_id, payload, repo.get_ref()).await {
        Ok(tender) => HttpResponse::Ok().json(tender),
        Err(err) => error_response(err),
    }
}

#[delete("/tenders/{tender_id}")]
pub async fn delete_tender(
    tender_id: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match delete_tender_service(&tender_id, repo.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(DeletedDto { success: true }),
        Err(err) => error_response(err),
    }
}
