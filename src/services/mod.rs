use std::time::Duration;

pub use errors::{ServiceError, ServiceResult};

pub mod auth;
pub mod bids;
pub mod dashboard;
pub mod errors;
pub mod tenders;

/// Suspends the caller for the simulated backend round-trip.
async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        actix_web::rt::time::sleep(delay).await;
    }
}
