use chrono::{Datelike, NaiveDate};

use crate::domain::tender::{NewTender, Tender, TenderPatch};
use crate::domain::types::{PersonName, TenderId};
use crate::repository::{
    InMemoryRepository, RepositoryResult, TenderListQuery, TenderReader, TenderWriter,
};

impl TenderReader for InMemoryRepository {
    fn list_tenders(&self, query: TenderListQuery) -> RepositoryResult<(usize, Vec<Tender>)> {
        let state = self.read()?;
        let mut items: Vec<Tender> = state.tenders.clone();

        if let Some(search) = query.search {
            let search = search.to_lowercase();
            items.retain(|t| t.matches_search(&search));
        }
        if let Some(status) = query.status {
            items.retain(|t| t.status.as_str() == status);
        }
        if let Some(category) = query.category {
            // Slug to display form; the supplied value is compared as given.
            let category = category.replace('-', " ");
            items.retain(|t| t.category.as_str().to_lowercase() == category);
        }

        let total = items.len();
        Ok((total, items))
    }

    fn get_tender_by_id(&self, id: &TenderId) -> RepositoryResult<Option<Tender>> {
        let state = self.read()?;
        Ok(state.tenders.iter().find(|t| &t.id == id).cloned())
    }
}

impl TenderWriter for InMemoryRepository {
    fn create_tender(
        &self,
        tender: NewTender,
        created_by: PersonName,
        today: NaiveDate,
    ) -> RepositoryResult<Tender> {
        let mut state = self.write()?;

        let id = TenderId::from_sequence(today.year(), state.next_tender_sequence);
        state.next_tender_sequence += 1;

        let tender = Tender::create(id, tender, created_by, today);
        state.tenders.push(tender.clone());
        Ok(tender)
    }

    fn update_tender(
        &self,
        id: &TenderId,
        patch: TenderPatch,
        today: NaiveDate,
    ) -> RepositoryResult<Option<Tender>> {
        let mut state = self.write()?;

        Ok(state
            .tenders
            .iter_mut()
            .find(|t| &t.id == id)
            .map(|tender| {
                tender.apply_patch(patch, today);
                tender.clone()
            }))
    }

    fn delete_tender(&self, id: &TenderId) -> RepositoryResult<usize> {
        let mut state = self.write()?;

        let before = state.tenders.len();
        state.tenders.retain(|t| &t.id != id);
        Ok(before - state.tenders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tender::TenderContact;
    use crate::domain::types::{
        EmailAddress, PhoneNumber, Requirement, TenderCategory, TenderDescription, TenderStatus,
        TenderTitle, TenderValue,
    };
    use crate::repository::LatencyConfig;

    fn seeded_repo() -> InMemoryRepository {
        InMemoryRepository::seeded(LatencyConfig::none()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    }

    fn sample_new_tender() -> NewTender {
        NewTender {
            title: TenderTitle::new("Fleet Transportation Services").unwrap(),
            description: TenderDescription::new("Staff shuttle service").unwrap(),
            status: TenderStatus::Pending,
            category: TenderCategory::Transportation,
            value: TenderValue::new(90000.0).unwrap(),
            publish_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
            deadline: NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
            requirements: vec![Requirement::new("Licensed operator").unwrap()],
            documents: vec![],
            contact: TenderContact {
                name: PersonName::new("Lisa Park").unwrap(),
                email: EmailAddress::new("lisa.park@hospital.org").unwrap(),
                phone: PhoneNumber::new("+1 (555) 456-7890").unwrap(),
                department: "Logistics".to_string(),
            },
        }
    }

    #[test]
    fn unfiltered_query_returns_every_tender() {
        let repo = seeded_repo();
        let (total, tenders) = repo.list_tenders(TenderListQuery::default()).unwrap();
        assert_eq!(total, 3);
        assert_eq!(tenders[0].id, "TEN-2023-001");
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let repo = seeded_repo();
        let (_, tenders) = repo
            .list_tenders(TenderListQuery::default().search("HOSPITAL"))
            .unwrap();
        assert_eq!(tenders.len(), 1);
        assert_eq!(tenders[0].id, "TEN-2023-003");
    }

    #[test]
    fn category_slug_is_matched_after_hyphen_substitution() {
        let repo = seeded_repo();
        let (_, tenders) = repo
            .list_tenders(TenderListQuery::default().category("it-services"))
            .unwrap();
        assert_eq!(tenders.len(), 1);
        assert_eq!(tenders[0].category, TenderCategory::ItServices);

        // The supplied value is not lower-cased.
        let (_, tenders) = repo
            .list_tenders(TenderListQuery::default().category("IT-Services"))
            .unwrap();
        assert!(tenders.is_empty());
    }

    #[test]
    fn filters_are_combined() {
        let repo = seeded_repo();
        let (_, tenders) = repo
            .list_tenders(
                TenderListQuery::default()
                    .search("upgrade")
                    .status("closed"),
            )
            .unwrap();
        assert!(tenders.is_empty());
    }

    #[test]
    fn created_ids_stay_unique_after_deletions() {
        let repo = seeded_repo();
        let first = repo
            .create_tender(sample_new_tender(), PersonName::new("Demo User").unwrap(), today())
            .unwrap();
        assert_eq!(first.id, "TEN-2023-004");

        let removed = repo
            .delete_tender(&TenderId::new("TEN-2023-001").unwrap())
            .unwrap();
        assert_eq!(removed, 1);

        let second = repo
            .create_tender(sample_new_tender(), PersonName::new("Demo User").unwrap(), today())
            .unwrap();
        assert_eq!(second.id, "TEN-2023-005");
    }

    #[test]
    fn created_id_carries_the_creation_year() {
        let repo = seeded_repo();
        let created = repo
            .create_tender(
                sample_new_tender(),
                PersonName::new("Demo User").unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(created.id, "TEN-2026-004");
        assert_eq!(created.id.sequence(), Some(4));
    }

    #[test]
    fn update_of_missing_tender_leaves_store_untouched() {
        let repo = seeded_repo();
        let (_, before) = repo.list_tenders(TenderListQuery::default()).unwrap();

        let updated = repo
            .update_tender(
                &TenderId::new("missing-id").unwrap(),
                TenderPatch {
                    status: Some(TenderStatus::Closed),
                    ..TenderPatch::default()
                },
                today(),
            )
            .unwrap();

        assert!(updated.is_none());
        let (_, after) = repo.list_tenders(TenderListQuery::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn delete_of_missing_tender_removes_nothing() {
        let repo = seeded_repo();
        let removed = repo
            .delete_tender(&TenderId::new("TEN-1999-001").unwrap())
            .unwrap();
        assert_eq!(removed, 0);
    }
}
