//! Invalidation Topics
//!
//! Shared query-invalidation keys. A view that depends on a collection reads
//! the topic's version; a mutation elsewhere bumps it and the view refetches.

use std::collections::HashMap;

/// One invalidation key per backend collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Currencies,
    ExchangeRates,
    Locations,
    Items,
    ItemCategories,
    WorkCentres,
    Boms,
    WorkOrders,
    SalesPersons,
    SalesPoints,
    SalesTypes,
    Customers,
    Suppliers,
    SalesOrders,
    Transfers,
}

impl Topic {
    /// Topics whose views also display data from this one
    pub fn dependents(self) -> &'static [Topic] {
        match self {
            Topic::ExchangeRates => &[Topic::Currencies],
            Topic::Currencies => &[Topic::ExchangeRates, Topic::Customers, Topic::Suppliers],
            Topic::Items => &[Topic::Boms, Topic::WorkOrders, Topic::Transfers],
            Topic::Locations => &[Topic::Boms, Topic::WorkOrders, Topic::Transfers, Topic::SalesPoints],
            Topic::WorkCentres => &[Topic::Boms],
            Topic::Customers => &[Topic::SalesOrders],
            Topic::SalesTypes => &[Topic::Customers],
            _ => &[],
        }
    }
}

/// Version counter per topic; unseen topics are at version 0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvalidationTopics {
    versions: HashMap<Topic, u64>,
}

impl InvalidationTopics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self, topic: Topic) -> u64 {
        self.versions.get(&topic).copied().unwrap_or(0)
    }

    /// Bump `topic` and its direct dependents
    pub fn invalidate(&mut self, topic: Topic) {
        self.bump(topic);
        self.invalidate_dependents(topic);
    }

    /// Bump only the dependents; used when the owning view already reloaded itself
    pub fn invalidate_dependents(&mut self, topic: Topic) {
        for dependent in topic.dependents() {
            self.bump(*dependent);
        }
    }

    fn bump(&mut self, topic: Topic) {
        *self.versions.entry(topic).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_bumps_dependents_only() {
        let mut topics = InvalidationTopics::new();
        topics.invalidate(Topic::ExchangeRates);
        assert_eq!(topics.version(Topic::ExchangeRates), 1);
        assert_eq!(topics.version(Topic::Currencies), 1);
        assert_eq!(topics.version(Topic::Customers), 0);

        topics.invalidate(Topic::Currencies);
        assert_eq!(topics.version(Topic::Currencies), 2);
        assert_eq!(topics.version(Topic::ExchangeRates), 2);
        assert_eq!(topics.version(Topic::Customers), 1);
    }

    #[test]
    fn test_dependents_only() {
        let mut topics = InvalidationTopics::new();
        topics.invalidate_dependents(Topic::Items);
        assert_eq!(topics.version(Topic::Items), 0);
        assert_eq!(topics.version(Topic::Boms), 1);
        assert_eq!(topics.version(Topic::Transfers), 1);
    }

    #[test]
    fn test_leaf_topic() {
        let mut topics = InvalidationTopics::new();
        topics.invalidate(Topic::SalesPersons);
        assert_eq!(topics.version(Topic::SalesPersons), 1);
        assert_eq!(topics.version(Topic::Boms), 0);
    }
}
