use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::tender::Tender;

/// Tender together with the days left until its deadline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderSummaryDto {
    #[serde(flatten)]
    pub tender: Tender,
    pub days_remaining: i64,
}

impl TenderSummaryDto {
    pub fn new(tender: Tender, today: NaiveDate) -> Self {
        let days_remaining = tender.days_remaining(today);
        Self {
            tender,
            days_remaining,
        }
    }
}

/// Result of a tender listing. All matches are returned on a single page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderListDto {
    pub tenders: Vec<TenderSummaryDto>,
    pub total_pages: usize,
}

impl TenderListDto {
    pub fn single_page(tenders: Vec<Tender>, today: NaiveDate) -> Self {
        Self {
            tenders: tenders
                .into_iter()
                .map(|t| TenderSummaryDto::new(t, today))
                .collect(),
            total_pages: 1,
        }
    }
}

/// Acknowledgement returned after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedDto {
    pub success: bool,
}
