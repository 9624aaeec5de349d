//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The browser implementation talks REST; tests use in-memory doubles.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Futures are not `Send` because the
/// browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait Repository<T: Entity> {
    /// Create a new entity, returning the stored record
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<T>;

    /// List the full collection in backend order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
