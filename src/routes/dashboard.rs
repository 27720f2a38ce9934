use actix_web::{HttpResponse, Responder, get, web};

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::error_response;
use crate::services::dashboard::{
    dashboard_stats as dashboard_stats_service, recent_tenders as recent_tenders_service,
};

#[get("/dashboard/stats")]
pub async fn stats(
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match dashboard_stats_service(server_config.stats_source(), repo.get_ref()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_response(err),
    }
}

#[get("/dashboard/tenders")]
pub async fn recent_tenders(
    _user: AuthenticatedUser,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match recent_tenders_service(repo.get_ref()).await {
        Ok(tenders) => HttpResponse::Ok().json(tenders),
        Err(err) => error_response(err),
    }
}
