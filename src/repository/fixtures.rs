//! Demo tenders and bids loaded into a fresh store.

use chrono::NaiveDate;

use crate::domain::bid::Bid;
use crate::domain::tender::{Tender, TenderContact, TenderDocument, TimelineEvent};
use crate::domain::types::{
    BidAmount, BidId, BidStatus, BidderName, CompanyName, DocumentId, DocumentName, DocumentSize,
    EmailAddress, PersonName, PhoneNumber, Requirement, TenderCategory, TenderDescription,
    TenderId, TenderStatus, TenderTitle, TenderValue, TimelineEventType, TypeConstraintError,
};

type FixtureResult<T> = Result<T, TypeConstraintError>;

fn date(value: &str) -> FixtureResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| TypeConstraintError::InvalidValue(format!("date {value}: {e}")))
}

fn document(id: &str, name: &str, size: &str, uploaded_at: &str) -> FixtureResult<TenderDocument> {
    Ok(TenderDocument {
        id: DocumentId::new(id)?,
        name: DocumentName::new(name)?,
        size: DocumentSize::new(size)?,
        uploaded_at: date(uploaded_at)?,
    })
}

fn event(
    event_type: TimelineEventType,
    on: &str,
    description: &str,
) -> FixtureResult<TimelineEvent> {
    Ok(TimelineEvent::new(event_type, date(on)?, description))
}

fn contact(name: &str, email: &str, phone: &str, department: &str) -> FixtureResult<TenderContact> {
    Ok(TenderContact {
        name: PersonName::new(name)?,
        email: EmailAddress::new(email)?,
        phone: PhoneNumber::new(phone)?,
        department: department.to_string(),
    })
}

fn requirements(items: &[&str]) -> FixtureResult<Vec<Requirement>> {
    items.iter().map(|r| Requirement::new(*r)).collect()
}

fn bid(
    id: &str,
    tender: &Tender,
    bidder: &str,
    company: &str,
    amount: f64,
    submitted_at: &str,
    status: BidStatus,
) -> FixtureResult<Bid> {
    Ok(Bid {
        id: BidId::new(id)?,
        tender_id: tender.id.clone(),
        tender_title: tender.title.clone(),
        bidder: BidderName::new(bidder)?,
        company: CompanyName::new(company)?,
        amount: BidAmount::new(amount)?,
        submitted_at: date(submitted_at)?,
        status,
    })
}

fn office_renovation() -> FixtureResult<Tender> {
    let mut tender = Tender {
        id: TenderId::new("TEN-2023-001")?,
        title: TenderTitle::new("Office Renovation Project")?,
        description: TenderDescription::new(
            "Complete renovation of the main office building including electrical, plumbing, and interior design work.",
        )?,
        status: TenderStatus::Active,
        category: TenderCategory::Construction,
        value: TenderValue::new(250_000.0)?,
        publish_date: date("2023-01-15")?,
        deadline: date("2023-12-30")?,
        created_at: date("2023-01-10")?,
        created_by: PersonName::new("John Smith")?,
        requirements: requirements(&[
            "Minimum 5 years of experience in commercial renovation",
            "Valid business license and insurance",
            "Ability to complete the project within 3 months",
            "Compliance with local building codes and regulations",
        ])?,
        documents: vec![
            document("doc-1", "Tender Specifications.pdf", "2.4 MB", "2023-01-10")?,
            document("doc-2", "Floor Plans.pdf", "5.1 MB", "2023-01-10")?,
            document("doc-3", "Legal Requirements.docx", "1.2 MB", "2023-01-10")?,
        ],
        bids: vec![],
        timeline: vec![
            event(TimelineEventType::Published, "2023-01-15", "Tender published")?,
            event(TimelineEventType::Updated, "2023-01-18", "Updated specifications")?,
            event(TimelineEventType::Deadline, "2023-12-30", "Submission deadline")?,
        ],
        contact: contact(
            "Sarah Johnson",
            "sarah.johnson@company.com",
            "+1 (555) 123-4567",
            "Facilities Management",
        )?,
    };
    tender.bids = vec![
        bid(
            "bid-1",
            &tender,
            "ABC Construction",
            "ABC Construction Ltd.",
            245_000.0,
            "2023-01-20",
            BidStatus::Pending,
        )?,
        bid(
            "bid-2",
            &tender,
            "BuildRight Inc",
            "BuildRight Incorporated",
            230_000.0,
            "2023-01-22",
            BidStatus::Pending,
        )?,
    ];
    Ok(tender)
}

fn it_infrastructure() -> FixtureResult<Tender> {
    let mut tender = Tender {
        id: TenderId::new("TEN-2023-002")?,
        title: TenderTitle::new("IT Infrastructure Upgrade")?,
        description: TenderDescription::new(
            "Comprehensive upgrade of company IT infrastructure including servers, networking equipment, and workstations.",
        )?,
        status: TenderStatus::Active,
        category: TenderCategory::ItServices,
        value: TenderValue::new(180_000.0)?,
        publish_date: date("2023-02-10")?,
        deadline: date("2023-12-15")?,
        created_at: date("2023-02-05")?,
        created_by: PersonName::new("Emily Chen")?,
        requirements: requirements(&[
            "Certified IT professionals with relevant qualifications",
            "Experience with enterprise-level infrastructure deployment",
            "Ability to provide ongoing support and maintenance",
            "24/7 emergency support capability",
        ])?,
        documents: vec![
            document("doc-4", "Technical Requirements.pdf", "3.2 MB", "2023-02-05")?,
            document("doc-5", "Current Infrastructure.xlsx", "1.8 MB", "2023-02-05")?,
        ],
        bids: vec![],
        timeline: vec![
            event(TimelineEventType::Published, "2023-02-10", "Tender published")?,
            event(TimelineEventType::Deadline, "2023-12-15", "Submission deadline")?,
        ],
        contact: contact(
            "Michael Wong",
            "michael.wong@company.com",
            "+1 (555) 987-6543",
            "Information Technology",
        )?,
    };
    tender.bids = vec![bid(
        "bid-3",
        &tender,
        "TechSolutions",
        "TechSolutions Inc.",
        175_000.0,
        "2023-02-15",
        BidStatus::Pending,
    )?];
    Ok(tender)
}

fn medical_equipment() -> FixtureResult<Tender> {
    let mut tender = Tender {
        id: TenderId::new("TEN-2023-003")?,
        title: TenderTitle::new("Medical Equipment Supply")?,
        description: TenderDescription::new(
            "Supply of various medical equipment for the new hospital wing including diagnostic equipment, patient monitoring systems, and surgical tools.",
        )?,
        status: TenderStatus::Closed,
        category: TenderCategory::MedicalSupplies,
        value: TenderValue::new(500_000.0)?,
        publish_date: date("2023-03-01")?,
        deadline: date("2023-04-15")?,
        created_at: date("2023-02-25")?,
        created_by: PersonName::new("Dr. Robert Miller")?,
        requirements: requirements(&[
            "FDA approved medical equipment",
            "Minimum 2-year warranty on all equipment",
            "Installation and staff training included",
            "Compliance with hospital safety standards",
        ])?,
        documents: vec![
            document("doc-6", "Equipment Specifications.pdf", "4.5 MB", "2023-02-25")?,
            document("doc-7", "Compliance Requirements.pdf", "2.1 MB", "2023-02-25")?,
        ],
        bids: vec![],
        timeline: vec![
            event(TimelineEventType::Published, "2023-03-01", "Tender published")?,
            event(TimelineEventType::Deadline, "2023-04-15", "Submission deadline")?,
            event(
                TimelineEventType::Completed,
                "2023-04-30",
                "Tender awarded to MedSupply Co",
            )?,
        ],
        contact: contact(
            "Dr. Lisa Park",
            "lisa.park@hospital.org",
            "+1 (555) 456-7890",
            "Medical Procurement",
        )?,
    };
    tender.bids = vec![
        bid(
            "bid-4",
            &tender,
            "MedSupply Co",
            "Medical Supply Company",
            495_000.0,
            "2023-03-10",
            BidStatus::Accepted,
        )?,
        bid(
            "bid-5",
            &tender,
            "HealthTech",
            "HealthTech Solutions",
            510_000.0,
            "2023-03-12",
            BidStatus::Rejected,
        )?,
    ];
    Ok(tender)
}

/// Builds the demo collections. The global bid list mirrors the bids held by
/// each tender.
pub fn seed() -> FixtureResult<(Vec<Tender>, Vec<Bid>)> {
    let tenders = vec![office_renovation()?, it_infrastructure()?, medical_equipment()?];
    let bids = tenders.iter().flat_map(|t| t.bids.iter().cloned()).collect();
    Ok((tenders, bids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::DashboardStats;

    #[test]
    fn seed_keeps_tender_and_global_bids_in_sync() {
        let (tenders, bids) = seed().unwrap();
        assert_eq!(tenders.len(), 3);
        assert_eq!(bids.len(), 5);
        for bid in &bids {
            let tender = tenders.iter().find(|t| t.id == bid.tender_id).unwrap();
            assert!(tender.bids.contains(bid));
            assert_eq!(bid.tender_title, tender.title);
        }
    }

    #[test]
    fn live_stats_over_seed_match_published_snapshot() {
        let (tenders, bids) = seed().unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();

        let stats = DashboardStats::compute(&tenders, &bids, today, 30);

        assert_eq!(stats, DashboardStats::SNAPSHOT);
    }
}
