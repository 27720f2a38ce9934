use std::collections::HashSet;

use pushkind_tenders::domain::types::{
    BidAmount, BidStatus, BidderName, CompanyName, EmailAddress, PersonName, TenderStatus,
    TimelineEventType, UserId, UserRole,
};
use pushkind_tenders::domain::user::User;
use pushkind_tenders::forms::bids::SubmitBidFormPayload;
use pushkind_tenders::forms::tenders::{CreateTenderFormPayload, UpdateTenderForm};
use pushkind_tenders::services::ServiceError;
use pushkind_tenders::services::bids::{recent_bids, submit_bid};
use pushkind_tenders::services::tenders::{
    TenderListParams, create_tender, delete_tender, get_tender, list_tenders, update_tender,
};

mod common;

fn demo_user() -> User {
    User {
        id: UserId::new("1").unwrap(),
        name: PersonName::new("Demo User").unwrap(),
        email: EmailAddress::new("demo@example.com").unwrap(),
        role: UserRole::Admin,
    }
}

fn office_renovation() -> CreateTenderFormPayload {
    common::office_renovation_form().try_into().unwrap()
}

fn bid_payload() -> SubmitBidFormPayload {
    SubmitBidFormPayload {
        bidder: BidderName::new("BuildRight Inc").unwrap(),
        company: CompanyName::new("BuildRight Incorporated").unwrap(),
        amount: BidAmount::new(230_000.0).unwrap(),
    }
}

#[actix_web::test]
async fn created_tender_has_fresh_id_and_no_bids() {
    let repo = common::seeded_repo();
    let before = list_tenders(TenderListParams::default(), &repo)
        .await
        .unwrap()
        .tenders;

    let created = create_tender(office_renovation(), &demo_user(), &repo)
        .await
        .unwrap();

    assert!(before.iter().all(|t| t.tender.id != created.id));
    assert!(created.bids.is_empty());
    assert_eq!(created.status, TenderStatus::Active);
    assert_eq!(created.timeline.len(), 2);
    assert_eq!(created.timeline[0].event_type, TimelineEventType::Published);
    assert_eq!(created.timeline[1].event_type, TimelineEventType::Deadline);

    let fetched = get_tender(created.id.as_str(), &repo).await.unwrap();
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn ids_stay_unique_across_deletes() {
    let repo = common::seeded_repo();
    let mut seen = HashSet::new();

    for _ in 0..3 {
        let created = create_tender(office_renovation(), &demo_user(), &repo)
            .await
            .unwrap();
        assert!(seen.insert(created.id.clone()));
        delete_tender(created.id.as_str(), &repo).await.unwrap();
    }
}

#[actix_web::test]
async fn deleted_tender_is_not_found() {
    let repo = common::seeded_repo();

    delete_tender("TEN-2023-002", &repo).await.unwrap();

    let err = get_tender("TEN-2023-002", &repo).await.unwrap_err();
    assert_eq!(err, ServiceError::NotFound("Tender"));
    assert_eq!(err.to_string(), "Tender not found");

    // Bids are not cascaded.
    let bids = recent_bids(&repo).await.unwrap();
    assert!(bids.iter().any(|b| b.tender_id == "TEN-2023-002"));
}

#[actix_web::test]
async fn submitted_bid_grows_both_collections_by_one() {
    let repo = common::seeded_repo();
    let tender = get_tender("TEN-2023-001", &repo).await.unwrap();
    let global_before = recent_bids(&repo).await.unwrap().len();

    let bid = submit_bid("TEN-2023-001", bid_payload(), &repo)
        .await
        .unwrap();

    let after = get_tender("TEN-2023-001", &repo).await.unwrap();
    assert_eq!(after.bids.len(), tender.bids.len() + 1);
    assert_eq!(recent_bids(&repo).await.unwrap().len(), global_before + 1);
    assert_eq!(bid.tender_title, tender.title);
    assert_eq!(after.bids.last(), Some(&bid));
}

#[actix_web::test]
async fn first_bid_on_new_tender_is_pending() {
    let repo = common::seeded_repo();
    let created = create_tender(office_renovation(), &demo_user(), &repo)
        .await
        .unwrap();

    submit_bid(created.id.as_str(), bid_payload(), &repo)
        .await
        .unwrap();

    let tender = get_tender(created.id.as_str(), &repo).await.unwrap();
    assert_eq!(tender.bids.len(), 1);
    assert_eq!(tender.bids[0].status, BidStatus::Pending);
}

#[actix_web::test]
async fn status_filter_keeps_only_matching_tenders() {
    let repo = common::seeded_repo();

    let all = list_tenders(
        TenderListParams {
            page: Some(1),
            search: Some(String::new()),
            status: Some("all".to_string()),
            category: Some("all".to_string()),
        },
        &repo,
    )
    .await
    .unwrap();
    assert_eq!(all.tenders.len(), 3);

    let active = list_tenders(
        TenderListParams {
            status: Some("active".to_string()),
            ..TenderListParams::default()
        },
        &repo,
    )
    .await
    .unwrap();
    assert_eq!(active.tenders.len(), 2);
    assert!(
        active
            .tenders
            .iter()
            .all(|t| t.tender.status == TenderStatus::Active)
    );
}

#[actix_web::test]
async fn updating_missing_tender_leaves_store_unchanged() {
    let repo = common::seeded_repo();
    let before = list_tenders(TenderListParams::default(), &repo)
        .await
        .unwrap();

    let form = UpdateTenderForm {
        title: Some("Renamed".to_string()),
        ..UpdateTenderForm::default()
    };
    let err = update_tender("missing-id", form.try_into().unwrap(), &repo)
        .await
        .unwrap_err();

    assert_eq!(err, ServiceError::NotFound("Tender"));
    let after = list_tenders(TenderListParams::default(), &repo)
        .await
        .unwrap();
    assert_eq!(after, before);
}
