//! REST Repository
//!
//! Generic `Repository` over one backend collection endpoint.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::ApiClient;
use super::traits::Repository;
use crate::domain::*;

/// An entity served under `{base}/{PATH}` and `{base}/{PATH}/{id}`
pub trait Resource: Entity + Serialize + DeserializeOwned {
    const PATH: &'static str;
}

macro_rules! resource {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(impl Resource for $ty {
            const PATH: &'static str = $path;
        })*
    };
}

resource! {
    Currency => "currencies",
    ExchangeRate => "exchange-rates",
    InventoryLocation => "inventory-locations",
    Item => "items",
    ItemCategory => "item-categories",
    WorkCentre => "work-centres",
    Bom => "boms",
    WorkOrder => "work-orders",
    SalesPerson => "sales-persons",
    SalesPos => "sales-points",
    SalesType => "sales-types",
    Customer => "customers",
    Supplier => "suppliers",
    SalesOrder => "sales-orders",
    InventoryTransfer => "inventory-transfers",
}

/// Repository backed by the REST API
pub struct RestRepository<T> {
    client: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for RestRepository<T> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), _marker: PhantomData }
    }
}

impl<T: Resource> RestRepository<T> {
    pub fn new(client: ApiClient) -> Self {
        Self { client, _marker: PhantomData }
    }
}

#[async_trait(?Send)]
impl<T: Resource> Repository<T> for RestRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        self.client.post(&[T::PATH], entity).await
    }

    async fn find_by_id(&self, id: &T::Id) -> DomainResult<T> {
        let id = id.to_string();
        match self.client.get(&[T::PATH, id.as_str()]).await {
            Err(DomainError::Backend { status: 404, .. }) => {
                Err(DomainError::NotFound(format!("{} {}", T::PATH, id)))
            }
            other => other,
        }
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        self.client.get(&[T::PATH]).await
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let id = entity.id().to_string();
        self.client.put(&[T::PATH, id.as_str()], entity).await
    }

    async fn delete(&self, id: &T::Id) -> DomainResult<()> {
        let id = id.to_string();
        self.client.delete(&[T::PATH, id.as_str()]).await
    }
}
