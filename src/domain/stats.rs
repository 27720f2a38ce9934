use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::bid::Bid;
use crate::domain::tender::Tender;
use crate::domain::types::{BidStatus, TenderStatus};

/// Aggregates shown on the dashboard header cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_tenders: usize,
    pub pending_bids: usize,
    pub total_value: f64,
    pub closing_soon: usize,
}

impl DashboardStats {
    /// Static snapshot published by the mock backend.
    pub const SNAPSHOT: DashboardStats = DashboardStats {
        active_tenders: 2,
        pending_bids: 3,
        total_value: 930_000.0,
        closing_soon: 1,
    };

    /// Computes the aggregates from live collections.
    ///
    /// A tender is closing soon when it is active and its deadline lies
    /// between `today` and `today + closing_soon_days`, both inclusive.
    pub fn compute(
        tenders: &[Tender],
        bids: &[Bid],
        today: NaiveDate,
        closing_soon_days: i64,
    ) -> Self {
        let active = tenders
            .iter()
            .filter(|t| t.status == TenderStatus::Active);

        Self {
            active_tenders: active.clone().count(),
            pending_bids: bids
                .iter()
                .filter(|b| b.status == BidStatus::Pending)
                .count(),
            total_value: tenders.iter().map(|t| t.value.get()).sum(),
            closing_soon: active
                .filter(|t| {
                    let days = (t.deadline - today).num_days();
                    (0..=closing_soon_days).contains(&days)
                })
                .count(),
        }
    }
}
