//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use erp_core::view::{InvalidationTopics, Topic};
use leptos::prelude::*;
use reactive_stores::Store;

/// Transient message shown after a write
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Confirmation banner, dismissed automatically
    Saved(String),
    /// Error modal, dismissed by the user
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Per-collection versions; views refetch when theirs changes
    pub topics: InvalidationTopics,
    pub notice: Option<Notice>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive version of one topic
pub fn store_topic_version(store: &AppStore, topic: Topic) -> u64 {
    store.topics().read().version(topic)
}

/// Version of one topic that only notifies when that topic's number changes.
/// Every write to `topics` notifies the whole field; subscribers go through this.
pub fn store_topic_memo(store: AppStore, topic: Topic) -> Memo<u64> {
    Memo::new(move |_| store_topic_version(&store, topic))
}

/// A collection changed outside its own table
pub fn store_invalidate(store: &AppStore, topic: Topic) {
    store.topics().write().invalidate(topic);
}

/// A table already reloaded itself; only the views depending on it refetch
pub fn store_invalidate_dependents(store: &AppStore, topic: Topic) {
    store.topics().write().invalidate_dependents(topic);
}

pub fn store_notify_saved(store: &AppStore, text: impl Into<String>) {
    store.notice().set(Some(Notice::Saved(text.into())));
}

pub fn store_notify_failed(store: &AppStore, text: impl Into<String>) {
    store.notice().set(Some(Notice::Failed(text.into())));
}

pub fn store_clear_notice(store: &AppStore) {
    store.notice().set(None);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Derived value counting how often it re-runs, standing in for a list's fetch effect
    fn subscriber(version: Memo<u64>) -> (Memo<u64>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            version.get()
        });
        (memo, runs)
    }

    #[test]
    fn test_owner_does_not_reload_after_dependents_only_invalidation() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        let (sales_persons, runs) = subscriber(store_topic_memo(store, Topic::SalesPersons));

        assert_eq!(sales_persons.get(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // A table mutation already reloaded its own rows
        store_invalidate_dependents(&store, Topic::SalesPersons);
        assert_eq!(sales_persons.get(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_invalidate(&store, Topic::Suppliers);
        assert_eq!(sales_persons.get(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_invalidate(&store, Topic::SalesPersons);
        assert_eq!(sales_persons.get(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dependent_reloads_when_its_source_changes() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        let (currencies, runs) = subscriber(store_topic_memo(store, Topic::Currencies));
        assert_eq!(currencies.get(), 0);

        store_invalidate_dependents(&store, Topic::ExchangeRates);
        assert_eq!(currencies.get(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
