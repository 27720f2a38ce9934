//! Helpers for integration tests.

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::NaiveDate;

use pushkind_tenders::forms::tenders::{ContactForm, CreateTenderForm};
use pushkind_tenders::models::config::ServerConfig;
use pushkind_tenders::repository::{InMemoryRepository, LatencyConfig};
use pushkind_tenders::routes;

/// Seeded store without artificial delays.
pub fn seeded_repo() -> InMemoryRepository {
    InMemoryRepository::seeded(LatencyConfig::none()).expect("demo data should load")
}

/// Server configuration without artificial delays.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        read_latency_ms: 0,
        write_latency_ms: 0,
        auth_latency_ms: 0,
        ..ServerConfig::default()
    }
}

/// Full application wired like the binary, backed by `repo`.
pub fn test_app(
    repo: InMemoryRepository,
    config: ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                .cookie_secure(false)
                .build(),
        )
        .app_data(web::Data::new(repo))
        .app_data(web::Data::new(config))
        .configure(routes::configure)
}

/// Extracts the session cookie set by a login or register response.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .expect("session cookie should be set")
        .into_owned()
}

/// Valid creation form for the office renovation scenario.
pub fn office_renovation_form() -> CreateTenderForm {
    CreateTenderForm {
        title: "Office Renovation Project".to_string(),
        description: "Complete renovation of the main office building".to_string(),
        category: "construction".to_string(),
        value: 250_000.0,
        status: Some("active".to_string()),
        publish_date: NaiveDate::from_ymd_opt(2023, 1, 15),
        deadline: NaiveDate::from_ymd_opt(2023, 12, 30),
        requirements: vec!["Valid business license and insurance".to_string()],
        documents: vec![],
        contact: ContactForm {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            department: "Facilities Management".to_string(),
        },
    }
}
