use chrono::Utc;

use crate::domain::stats::DashboardStats;
use crate::dto::tenders::TenderSummaryDto;
use crate::repository::{BidReader, StoreLatency, TenderListQuery, TenderReader};

use super::{ServiceError, ServiceResult, simulate_latency};

/// Where dashboard aggregates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    /// The fixed snapshot published by the mock backend.
    Snapshot,
    /// Computed from the current collections.
    Live { closing_soon_days: i64 },
}

pub async fn dashboard_stats<R>(source: StatsSource, repo: &R) -> ServiceResult<DashboardStats>
where
    R: TenderReader + BidReader + StoreLatency,
{
    simulate_latency(repo.read_latency()).await;

    let closing_soon_days = match source {
        StatsSource::Snapshot => return Ok(DashboardStats::SNAPSHOT),
        StatsSource::Live { closing_soon_days } => closing_soon_days,
    };

    let tenders = match repo.list_tenders(TenderListQuery::default()) {
        Ok((_total, tenders)) => tenders,
        Err(e) => {
            log::error!("Failed to list tenders for dashboard: {e}");
            return Err(ServiceError::Internal);
        }
    };
    let bids = match repo.list_bids() {
        Ok(bids) => bids,
        Err(e) => {
            log::error!("Failed to list bids for dashboard: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let today = Utc::now().date_naive();
    Ok(DashboardStats::compute(
        &tenders,
        &bids,
        today,
        closing_soon_days,
    ))
}

/// Every tender in the store with its remaining days. No recency window is
/// applied.
pub async fn recent_tenders<R>(repo: &R) -> ServiceResult<Vec<TenderSummaryDto>>
where
    R: TenderReader + StoreLatency,
{
    simulate_latency(repo.read_latency()).await;

    let today = Utc::now().date_naive();
    match repo.list_tenders(TenderListQuery::default()) {
        Ok((_total, tenders)) => Ok(tenders
            .into_iter()
            .map(|t| TenderSummaryDto::new(t, today))
            .collect()),
        Err(e) => {
            log::error!("Failed to list recent tenders: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, LatencyConfig};

    #[actix_web::test]
    async fn snapshot_ignores_store_contents() {
        let repo = InMemoryRepository::new(LatencyConfig::none());
        let stats = dashboard_stats(StatsSource::Snapshot, &repo).await.unwrap();
        assert_eq!(stats, DashboardStats::SNAPSHOT);
    }

    #[actix_web::test]
    async fn live_stats_follow_store_contents() {
        let repo = InMemoryRepository::seeded(LatencyConfig::none()).unwrap();
        let stats = dashboard_stats(
            StatsSource::Live {
                closing_soon_days: 30,
            },
            &repo,
        )
        .await
        .unwrap();

        assert_eq!(stats.active_tenders, 2);
        assert_eq!(stats.pending_bids, 3);
        assert_eq!(stats.total_value, 930_000.0);
    }

    #[actix_web::test]
    async fn recent_tenders_returns_whole_collection() {
        let repo = InMemoryRepository::seeded(LatencyConfig::none()).unwrap();
        let tenders = recent_tenders(&repo).await.unwrap();
        assert_eq!(tenders.len(), 3);
        assert!(tenders.iter().all(|t| t.days_remaining >= 0));
    }
}
