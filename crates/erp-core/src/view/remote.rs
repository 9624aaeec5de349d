//! Remote Collection
//!
//! Generic controller behind every table view: fetch the whole collection,
//! run a mutation, then re-fetch. There is no optimistic local patching.

use std::marker::PhantomData;

use crate::domain::{Deactivatable, DomainResult, Entity};
use crate::repository::Repository;

/// Outcome of a mutation followed by a reload
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    /// Result of the write itself
    pub outcome: DomainResult<()>,
    /// Fresh collection, or `None` when the reload failed (keep prior rows)
    pub reloaded: Option<Vec<T>>,
}

/// Table controller over one repository
pub struct RemoteCollection<T, R> {
    repo: R,
    label: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T, R: Clone> Clone for RemoteCollection<T, R> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone(), label: self.label, _marker: PhantomData }
    }
}

impl<T: Entity, R: Repository<T>> RemoteCollection<T, R> {
    /// `label` names the collection in log lines
    pub fn new(repo: R, label: &'static str) -> Self {
        Self { repo, label, _marker: PhantomData }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Fetch the full collection. Failures are logged; callers keep what they show.
    pub async fn fetch_all(&self) -> DomainResult<Vec<T>> {
        match self.repo.list().await {
            Ok(rows) => {
                log::debug!("[LIST] {}: loaded {} rows", self.label, rows.len());
                Ok(rows)
            }
            Err(err) => {
                log::warn!("[LIST] {}: fetch failed: {}", self.label, err);
                Err(err)
            }
        }
    }

    /// Delete one record, then reload regardless of the outcome
    pub async fn delete(&self, id: &T::Id) -> Mutation<T> {
        let outcome = self.repo.delete(id).await;
        if let Err(err) = &outcome {
            log::warn!("[LIST] {}: delete {} failed: {}", self.label, id, err);
        }
        self.reload_after(outcome).await
    }

    /// Flip the inactive flag of one record, then reload regardless of the outcome
    pub async fn toggle_inactive(&self, row: &T) -> Mutation<T>
    where
        T: Deactivatable,
    {
        let mut updated = row.clone();
        updated.set_inactive(!row.is_inactive());
        let outcome = self.repo.update(&updated).await.map(|_| ());
        if let Err(err) = &outcome {
            log::warn!("[LIST] {}: toggle inactive {} failed: {}", self.label, row.id(), err);
        }
        self.reload_after(outcome).await
    }

    /// Persist an already-transformed record, then reload
    pub async fn replace(&self, row: &T) -> Mutation<T> {
        let outcome = self.repo.update(row).await.map(|_| ());
        if let Err(err) = &outcome {
            log::warn!("[LIST] {}: update {} failed: {}", self.label, row.id(), err);
        }
        self.reload_after(outcome).await
    }

    async fn reload_after(&self, outcome: DomainResult<()>) -> Mutation<T> {
        let reloaded = self.fetch_all().await.ok();
        Mutation { outcome, reloaded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, SalesPerson};
    use crate::view::testing::MemoryRepository;

    fn people() -> Vec<SalesPerson> {
        vec![
            SalesPerson { id: 1, salesman_name: "Ann".into(), ..Default::default() },
            SalesPerson { id: 2, salesman_name: "Bob".into(), ..Default::default() },
            SalesPerson { id: 3, salesman_name: "Cid".into(), inactive: true, ..Default::default() },
        ]
    }

    #[tokio::test]
    async fn test_delete_calls_backend_once_then_refetches_once() {
        let repo = MemoryRepository::new(people());
        let collection = RemoteCollection::new(repo.clone(), "sales persons");

        let mutation = collection.delete(&2).await;

        assert_eq!(mutation.outcome, Ok(()));
        assert_eq!(repo.calls().deleted, vec![2]);
        assert_eq!(repo.calls().list, 1);
        let ids: Vec<u32> = mutation.reloaded.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_failed_delete_still_refetches() {
        let repo = MemoryRepository::new(people());
        repo.fail_writes(DomainError::Backend { status: 409, message: Some("In use".into()) });
        let collection = RemoteCollection::new(repo.clone(), "sales persons");

        let mutation = collection.delete(&1).await;

        assert_eq!(mutation.outcome.unwrap_err().user_message(), "In use");
        assert_eq!(repo.calls().list, 1);
        assert_eq!(mutation.reloaded.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_toggle_inactive_sends_flipped_flag() {
        let repo = MemoryRepository::new(people());
        let collection = RemoteCollection::new(repo.clone(), "sales persons");

        let row = people().remove(2);
        let mutation = collection.toggle_inactive(&row).await;

        assert!(mutation.outcome.is_ok());
        assert_eq!(repo.calls().updated, 1);
        let reloaded = mutation.reloaded.unwrap();
        assert!(!reloaded.iter().find(|p| p.id == 3).unwrap().inactive);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_nothing_new() {
        let repo = MemoryRepository::<SalesPerson>::new(vec![]);
        repo.fail_reads(DomainError::Transport("offline".into()));
        let collection = RemoteCollection::new(repo, "sales persons");
        assert!(collection.fetch_all().await.is_err());
    }

    #[tokio::test]
    async fn test_currency_table_shows_inactive_on_request() {
        use crate::domain::Currency;
        use crate::view::{visible_rows, ListState, PageSize};

        let currency = |id: u32, code: &str, inactive: bool| Currency {
            id,
            currency_abbreviation: code.into(),
            currency_name: code.into(),
            inactive,
            ..Default::default()
        };
        let repo = MemoryRepository::new(vec![
            currency(1, "USD", false),
            currency(2, "EUR", false),
            currency(3, "GBP", true),
        ]);
        let rows = RemoteCollection::new(repo, "currencies").fetch_all().await.unwrap();

        let mut state = ListState::new(PageSize::Rows(10));
        assert_eq!(visible_rows(&rows, &state).rows.len(), 2);

        state.set_include_inactive(true);
        let page = visible_rows(&rows, &state);
        assert_eq!(page.rows.len(), 3);
        assert!(page.rows[2].inactive);
    }
}
