//! Application Context
//!
//! Shared state provided via Leptos Context API.

use erp_core::repository::{ApiClient, Resource, RestRepository};
use erp_core::view::{PageSize, RemoteCollection};
use leptos::prelude::*;

/// Screens reachable from the navigation bar and from table actions
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Currencies,
    CurrencyEdit(Option<u32>),
    ExchangeRates,
    ExchangeRateEdit(Option<u32>),
    Locations,
    LocationEdit(Option<String>),
    Items,
    WorkCentres,
    WorkCentreEdit(Option<u32>),
    Boms(Option<u32>),
    BomEdit { parent: u32, id: Option<u32> },
    WhereUsed,
    WorkOrders,
    WorkOrderEdit(Option<u32>),
    Transfers,
    SalesPersons,
    SalesPersonEdit(Option<u32>),
    SalesPoints,
    SalesPosEdit(Option<u32>),
    Customers,
    CustomerEdit(Option<u32>),
    SalesOrders,
    Suppliers,
    SupplierEdit(Option<u32>),
    Logs,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client; kept local because fetch futures are not `Send`
    api: StoredValue<ApiClient, LocalStorage>,
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
    /// Rows per page a table starts with
    pub page_size: PageSize,
}

impl AppContext {
    pub fn new(api: ApiClient, page: (ReadSignal<Page>, WriteSignal<Page>), page_size: PageSize) -> Self {
        Self { api: StoredValue::new_local(api), page: page.0, set_page: page.1, page_size }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[APP] Navigate to {:?}", page);
        self.set_page.set(page);
    }

    pub fn repo<T: Resource>(&self) -> RestRepository<T> {
        RestRepository::new(self.api.get_value())
    }

    /// Table controller for one collection; `label` names it in log lines
    pub fn collection<T: Resource>(&self, label: &'static str) -> RemoteCollection<T, RestRepository<T>> {
        RemoteCollection::new(self.repo(), label)
    }
}
