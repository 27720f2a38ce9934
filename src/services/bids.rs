use chrono::Utc;

use crate::domain::bid::Bid;
use crate::domain::types::TenderId;
use crate::forms::bids::SubmitBidFormPayload;
use crate::repository::{BidReader, BidWriter, StoreLatency};

use super::{ServiceError, ServiceResult, simulate_latency};

/// Submits a pending bid against the tender identified by `tender_id`.
pub async fn submit_bid<R>(
    tender_id: &str,
    payload: SubmitBidFormPayload,
    repo: &R,
) -> ServiceResult<Bid>
where
    R: BidWriter + StoreLatency,
{
    simulate_latency(repo.write_latency()).await;

    let tender_id = TenderId::new(tender_id).map_err(|_| ServiceError::NotFound("Tender"))?;
    let today = Utc::now().date_naive();
    match repo.submit_bid(&tender_id, payload.into_new_bid(), today) {
        Ok(Some(bid)) => {
            log::info!("Bid {} submitted for tender {tender_id}", bid.id);
            Ok(bid)
        }
        Ok(None) => {
            log::debug!("Tender {tender_id} not found for bid submission");
            Err(ServiceError::NotFound("Tender"))
        }
        Err(e) => {
            log::error!("Failed to submit bid: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every bid in the store. No recency window is applied.
pub async fn recent_bids<R>(repo: &R) -> ServiceResult<Vec<Bid>>
where
    R: BidReader + StoreLatency,
{
    simulate_latency(repo.read_latency()).await;

    repo.list_bids().map_err(|e| {
        log::error!("Failed to list bids: {e}");
        ServiceError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{BidAmount, BidStatus, BidderName, CompanyName};
    use crate::repository::test::BrokenRepository;
    use crate::repository::{InMemoryRepository, LatencyConfig};

    fn sample_payload() -> SubmitBidFormPayload {
        SubmitBidFormPayload {
            bidder: BidderName::new("ABC Construction").unwrap(),
            company: CompanyName::new("ABC Construction Ltd.").unwrap(),
            amount: BidAmount::new(245000.0).unwrap(),
        }
    }

    #[actix_web::test]
    async fn submitted_bid_is_pending_and_listed() {
        let repo = InMemoryRepository::seeded(LatencyConfig::none()).unwrap();
        let before = recent_bids(&repo).await.unwrap().len();

        let bid = submit_bid("TEN-2023-002", sample_payload(), &repo)
            .await
            .unwrap();

        assert_eq!(bid.status, BidStatus::Pending);
        assert_eq!(bid.tender_title, "IT Infrastructure Upgrade");
        let bids = recent_bids(&repo).await.unwrap();
        assert_eq!(bids.len(), before + 1);
        assert_eq!(bids.last(), Some(&bid));
    }

    #[actix_web::test]
    async fn bid_for_missing_tender_is_not_found() {
        let repo = InMemoryRepository::seeded(LatencyConfig::none()).unwrap();
        let err = submit_bid("TEN-2023-404", sample_payload(), &repo)
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound("Tender"));
    }

    #[actix_web::test]
    async fn store_failure_is_internal() {
        let err = recent_bids(&BrokenRepository).await.unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }
}
