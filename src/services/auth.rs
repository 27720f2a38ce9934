use std::time::Duration;

use crate::domain::types::{PersonName, UserId, UserRole};
use crate::domain::user::User;
use crate::forms::auth::{LoginFormPayload, RegisterFormPayload};

use super::{ServiceError, ServiceResult, simulate_latency};

/// Identifier handed to every user of the demo console.
const DEMO_USER_ID: &str = "1";
const DEMO_USER_NAME: &str = "Demo User";

/// Logs in with any non-empty credentials. Every login yields the demo
/// administrator.
pub async fn login(payload: LoginFormPayload, latency: Duration) -> ServiceResult<User> {
    simulate_latency(latency).await;

    let user = User {
        id: demo_user_id()?,
        name: PersonName::new(DEMO_USER_NAME).map_err(|e| {
            log::error!("Invalid demo user name: {e}");
            ServiceError::Internal
        })?,
        email: payload.email,
        role: UserRole::Admin,
    };
    log::info!("User {} logged in", user.email);
    Ok(user)
}

/// Registers a regular user. Nothing is stored beyond the session.
pub async fn register(payload: RegisterFormPayload, latency: Duration) -> ServiceResult<User> {
    simulate_latency(latency).await;

    let user = User {
        id: demo_user_id()?,
        name: payload.name,
        email: payload.email,
        role: UserRole::User,
    };
    log::info!("User {} registered", user.email);
    Ok(user)
}

fn demo_user_id() -> ServiceResult<UserId> {
    UserId::new(DEMO_USER_ID).map_err(|e| {
        log::error!("Invalid demo user id: {e}");
        ServiceError::Internal
    })
}
