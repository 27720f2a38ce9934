use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::bid::Bid;
use crate::domain::types::{
    DocumentId, DocumentName, DocumentSize, EmailAddress, PersonName, PhoneNumber, Requirement,
    TenderCategory, TenderDescription, TenderId, TenderStatus, TenderTitle, TenderValue,
    TimelineEventType,
};

/// A published procurement request inviting bids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: TenderId,
    pub title: TenderTitle,
    pub description: TenderDescription,
    pub status: TenderStatus,
    pub category: TenderCategory,
    pub value: TenderValue,
    pub publish_date: NaiveDate,
    pub deadline: NaiveDate,
    pub created_at: NaiveDate,
    pub created_by: PersonName,
    pub requirements: Vec<Requirement>,
    pub documents: Vec<TenderDocument>,
    /// Bids submitted against this tender, in submission order.
    pub bids: Vec<Bid>,
    /// Append-only audit trail.
    pub timeline: Vec<TimelineEvent>,
    pub contact: TenderContact,
}

/// Metadata of a document attached to a tender. No file content is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenderDocument {
    pub id: DocumentId,
    pub name: DocumentName,
    pub size: DocumentSize,
    pub uploaded_at: NaiveDate,
}

/// Person responsible for answering questions about a tender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenderContact {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub event_type: TimelineEventType,
    pub date: NaiveDate,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(event_type: TimelineEventType, date: NaiveDate, description: &str) -> Self {
        Self {
            event_type,
            date,
            description: description.to_string(),
        }
    }
}

/// Data required to create a new [`Tender`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTender {
    pub title: TenderTitle,
    pub description: TenderDescription,
    pub status: TenderStatus,
    pub category: TenderCategory,
    pub value: TenderValue,
    pub publish_date: NaiveDate,
    pub deadline: NaiveDate,
    pub requirements: Vec<Requirement>,
    pub documents: Vec<TenderDocument>,
    pub contact: TenderContact,
}

/// Partial update applied to an existing [`Tender`].
///
/// Only the supplied fields are replaced. Nested values (`contact`,
/// `requirements`, `documents`) are swapped wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenderPatch {
    pub title: Option<TenderTitle>,
    pub description: Option<TenderDescription>,
    pub status: Option<TenderStatus>,
    pub category: Option<TenderCategory>,
    pub value: Option<TenderValue>,
    pub publish_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub requirements: Option<Vec<Requirement>>,
    pub documents: Option<Vec<TenderDocument>>,
    pub contact: Option<TenderContact>,
}

impl Tender {
    /// Builds a freshly created tender with an empty bid list and a timeline
    /// holding the publication and deadline events.
    pub fn create(id: TenderId, new: NewTender, created_by: PersonName, today: NaiveDate) -> Self {
        let timeline = vec![
            TimelineEvent::new(TimelineEventType::Published, today, "Tender published"),
            TimelineEvent::new(
                TimelineEventType::Deadline,
                new.deadline,
                "Submission deadline",
            ),
        ];

        Self {
            id,
            title: new.title,
            description: new.description,
            status: new.status,
            category: new.category,
            value: new.value,
            publish_date: new.publish_date,
            deadline: new.deadline,
            created_at: today,
            created_by,
            requirements: new.requirements,
            documents: new.documents,
            bids: Vec::new(),
            timeline,
            contact: new.contact,
        }
    }

    /// Shallow-merges `patch` and records an `updated` timeline event.
    pub fn apply_patch(&mut self, patch: TenderPatch, today: NaiveDate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(publish_date) = patch.publish_date {
            self.publish_date = publish_date;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(requirements) = patch.requirements {
            self.requirements = requirements;
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }

        self.timeline.push(TimelineEvent::new(
            TimelineEventType::Updated,
            today,
            "Tender updated",
        ));
    }

    /// Whole days left until the deadline, never negative.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days().max(0)
    }

    /// Case-insensitive substring match against title, id and description.
    /// `term` must already be lower-cased.
    pub fn matches_search(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.id.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn sample_new_tender() -> NewTender {
        NewTender {
            title: TenderTitle::new("Office Renovation Project").unwrap(),
            description: TenderDescription::new("Renovation of the main office").unwrap(),
            status: TenderStatus::Draft,
            category: TenderCategory::Construction,
            value: TenderValue::new(250000.0).unwrap(),
            publish_date: date("2023-01-15"),
            deadline: date("2023-12-30"),
            requirements: vec![Requirement::new("Valid business license").unwrap()],
            documents: vec![],
            contact: TenderContact {
                name: PersonName::new("Sarah Johnson").unwrap(),
                email: EmailAddress::new("sarah.johnson@company.com").unwrap(),
                phone: PhoneNumber::new("+1 (555) 123-4567").unwrap(),
                department: String::new(),
            },
        }
    }

    fn sample_tender() -> Tender {
        Tender::create(
            TenderId::new("TEN-2023-004").unwrap(),
            sample_new_tender(),
            PersonName::new("Demo User").unwrap(),
            date("2023-01-10"),
        )
    }

    #[test]
    fn create_seeds_published_and_deadline_events() {
        let tender = sample_tender();

        assert!(tender.bids.is_empty());
        assert_eq!(tender.created_at, date("2023-01-10"));
        assert_eq!(tender.timeline.len(), 2);
        assert_eq!(tender.timeline[0].event_type, TimelineEventType::Published);
        assert_eq!(tender.timeline[0].date, date("2023-01-10"));
        assert_eq!(tender.timeline[1].event_type, TimelineEventType::Deadline);
        assert_eq!(tender.timeline[1].date, date("2023-12-30"));
    }

    #[test]
    fn patch_replaces_only_supplied_fields() {
        let mut tender = sample_tender();
        let patch = TenderPatch {
            status: Some(TenderStatus::Active),
            contact: Some(TenderContact {
                name: PersonName::new("Michael Wong").unwrap(),
                email: EmailAddress::new("michael.wong@company.com").unwrap(),
                phone: PhoneNumber::new("+1 (555) 987-6543").unwrap(),
                department: String::new(),
            }),
            ..TenderPatch::default()
        };

        tender.apply_patch(patch, date("2023-02-01"));

        assert_eq!(tender.status, TenderStatus::Active);
        assert_eq!(tender.title, "Office Renovation Project");
        assert_eq!(tender.contact.name, "Michael Wong");
        assert_eq!(tender.timeline.len(), 3);
        assert_eq!(tender.timeline[2].event_type, TimelineEventType::Updated);
        assert_eq!(tender.timeline[2].date, date("2023-02-01"));
    }

    #[test]
    fn days_remaining_is_floored_at_zero() {
        let tender = sample_tender();
        assert_eq!(tender.days_remaining(date("2023-12-20")), 10);
        assert_eq!(tender.days_remaining(date("2024-01-05")), 0);
    }

    #[test]
    fn search_matches_id_case_insensitively() {
        let tender = sample_tender();
        assert!(tender.matches_search("ten-2023-004"));
        assert!(tender.matches_search("renovation"));
        assert!(!tender.matches_search("hospital"));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_tender()).unwrap();
        assert_eq!(json["publishDate"], "2023-01-15");
        assert_eq!(json["createdBy"], "Demo User");
        assert_eq!(json["category"], "Construction");
        assert_eq!(json["timeline"][0]["type"], "published");
    }
}
