use chrono::Utc;
use serde::Deserialize;

use crate::domain::bid::Bid;
use crate::domain::tender::Tender;
use crate::domain::types::TenderId;
use crate::domain::user::User;
use crate::dto::tenders::TenderListDto;
use crate::forms::tenders::{CreateTenderFormPayload, UpdateTenderFormPayload};
use crate::repository::{StoreLatency, TenderListQuery, TenderReader, TenderWriter};

use super::{ServiceError, ServiceResult, simulate_latency};

/// Value of the `status` and `category` filters that disables them.
const ALL: &str = "all";

/// Query parameters accepted when listing tenders.
#[derive(Deserialize, Debug, Default)]
pub struct TenderListParams {
    pub page: Option<usize>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

fn active_filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v.as_str() != ALL)
}

/// Unknown or malformed ids are reported the same way as missing tenders.
fn parse_tender_id(id: &str) -> ServiceResult<TenderId> {
    TenderId::new(id).map_err(|_| ServiceError::NotFound("Tender"))
}

/// Lists tenders matching the search term, status and category filters.
///
/// `page` is accepted but results are never split: every match is returned
/// and `total_pages` is always 1.
pub async fn list_tenders<R>(params: TenderListParams, repo: &R) -> ServiceResult<TenderListDto>
where
    R: TenderReader + StoreLatency,
{
    simulate_latency(repo.read_latency()).await;

    if let Some(page) = params.page.filter(|page| *page > 1) {
        log::debug!("Page {page} requested; every match is returned on page 1");
    }

    let mut query = TenderListQuery::default();
    if let Some(search) = params.search.filter(|s| !s.is_empty()) {
        query = query.search(search);
    }
    if let Some(status) = active_filter(params.status) {
        query = query.status(status);
    }
    if let Some(category) = active_filter(params.category) {
        query = query.category(category);
    }

    match repo.list_tenders(query) {
        Ok((_total, tenders)) => Ok(TenderListDto::single_page(
            tenders,
            Utc::now().date_naive(),
        )),
        Err(e) => {
            log::error!("Failed to list tenders: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub async fn get_tender<R>(id: &str, repo: &R) -> ServiceResult<Tender>
where
    R: TenderReader + StoreLatency,
{
    simulate_latency(repo.read_latency()).await;

    let tender_id = parse_tender_id(id)?;
    match repo.get_tender_by_id(&tender_id) {
        Ok(Some(tender)) => Ok(tender),
        Ok(None) => {
            log::debug!("Tender {tender_id} not found");
            Err(ServiceError::NotFound("Tender"))
        }
        Err(e) => {
            log::error!("Failed to get tender: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Creates a tender on behalf of `user`, who is recorded as its author.
pub async fn create_tender<R>(
    payload: CreateTenderFormPayload,
    user: &User,
    repo: &R,
) -> ServiceResult<Tender>
where
    R: TenderWriter + StoreLatency,
{
    simulate_latency(repo.write_latency()).await;

    let today = Utc::now().date_naive();
    match repo.create_tender(payload.into_new_tender(), user.name.clone(), today) {
        Ok(tender) => {
            log::info!("Tender {} created by {}", tender.id, user.email);
            Ok(tender)
        }
        Err(e) => {
            log::error!("Failed to create tender: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub async fn update_tender<R>(
    id: &str,
    payload: UpdateTenderFormPayload,
    repo: &R,
) -> ServiceResult<Tender>
where
    R: TenderWriter + StoreLatency,
{
    simulate_latency(repo.write_latency()).await;

    let tender_id = parse_tender_id(id)?;
    let today = Utc::now().date_naive();
    match repo.update_tender(&tender_id, payload.patch, today) {
        Ok(Some(tender)) => {
            log::info!("Tender {tender_id} updated");
            Ok(tender)
        }
        Ok(None) => {
            log::debug!("Tender {tender_id} not found for update");
            Err(ServiceError::NotFound("Tender"))
        }
        Err(e) => {
            log::error!("Failed to update tender: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Removes a tender. Bids already submitted against it stay in the global
/// bid collection.
pub async fn delete_tender<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: TenderWriter + StoreLatency,
{
    simulate_latency(repo.write_latency()).await;

    let tender_id = parse_tender_id(id)?;
    match repo.delete_tender(&tender_id) {
        Ok(0) => {
            log::debug!("Tender {tender_id} not found for deletion");
            Err(ServiceError::NotFound("Tender"))
        }
        Ok(_) => {
            log::info!("Tender {tender_id} deleted");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete tender: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Bids held by a single tender, in submission order.
pub async fn list_tender_bids<R>(id: &str, repo: &R) -> ServiceResult<Vec<Bid>>
where
    R: TenderReader + StoreLatency,
{
    get_tender(id, repo).await.map(|tender| tender.bids)
}
