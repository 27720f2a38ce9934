use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::tender::Tender;
use crate::domain::types::{
    BidAmount, BidId, BidStatus, BidderName, CompanyName, TenderId, TenderTitle,
};

/// A supplier's proposal submitted against a tender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: BidId,
    pub tender_id: TenderId,
    /// Copy of the tender title taken at submission time.
    pub tender_title: TenderTitle,
    pub bidder: BidderName,
    pub company: CompanyName,
    pub amount: BidAmount,
    pub submitted_at: NaiveDate,
    pub status: BidStatus,
}

/// Information supplied by a bidder when submitting a [`Bid`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewBid {
    pub bidder: BidderName,
    pub company: CompanyName,
    pub amount: BidAmount,
}

impl Bid {
    /// Builds a pending bid against `tender`.
    pub fn submit(id: BidId, tender: &Tender, new: NewBid, today: NaiveDate) -> Self {
        Self {
            id,
            tender_id: tender.id.clone(),
            tender_title: tender.title.clone(),
            bidder: new.bidder,
            company: new.company,
            amount: new.amount,
            submitted_at: today,
            status: BidStatus::Pending,
        }
    }
}
