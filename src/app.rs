//! ERP Admin Frontend App
//!
//! Navigation column plus the current page. Page switching is a single
//! in-memory signal.

use erp_core::{ApiClient, ApiConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NavBar, NoticeBar};
use crate::context::{AppContext, Page};
use crate::pages::*;
use crate::store::AppState;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let (page, set_page) = signal(Page::Currencies);

    // Provide context to all children
    provide_context(AppContext::new(ApiClient::new(&config), (page, set_page), config.default_page_size));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || render_page(page.get())}
            </main>
            <NoticeBar />
        </div>
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Currencies => view! { <CurrenciesPage /> }.into_any(),
        Page::CurrencyEdit(id) => view! { <CurrencyFormPage id=id /> }.into_any(),
        Page::ExchangeRates => view! { <ExchangeRatesPage /> }.into_any(),
        Page::ExchangeRateEdit(id) => view! { <ExchangeRateFormPage id=id /> }.into_any(),
        Page::Locations => view! { <LocationsPage /> }.into_any(),
        Page::LocationEdit(code) => view! { <LocationFormPage code=code /> }.into_any(),
        Page::Items => view! { <ItemsPage /> }.into_any(),
        Page::WorkCentres => view! { <WorkCentresPage /> }.into_any(),
        Page::WorkCentreEdit(id) => view! { <WorkCentreFormPage id=id /> }.into_any(),
        Page::Boms(parent) => view! { <BomPage parent=parent /> }.into_any(),
        Page::BomEdit { parent, id } => view! { <BomFormPage parent=parent id=id /> }.into_any(),
        Page::WhereUsed => view! { <WhereUsedPage /> }.into_any(),
        Page::WorkOrders => view! { <WorkOrdersPage /> }.into_any(),
        Page::WorkOrderEdit(id) => view! { <WorkOrderFormPage id=id /> }.into_any(),
        Page::Transfers => view! { <TransfersPage /> }.into_any(),
        Page::SalesPersons => view! { <SalesPersonsPage /> }.into_any(),
        Page::SalesPersonEdit(id) => view! { <SalesPersonFormPage id=id /> }.into_any(),
        Page::SalesPoints => view! { <SalesPointsPage /> }.into_any(),
        Page::SalesPosEdit(id) => view! { <SalesPosFormPage id=id /> }.into_any(),
        Page::Customers => view! { <CustomersPage /> }.into_any(),
        Page::CustomerEdit(id) => view! { <CustomerFormPage id=id /> }.into_any(),
        Page::SalesOrders => view! { <SalesOrdersPage /> }.into_any(),
        Page::Suppliers => view! { <SuppliersPage /> }.into_any(),
        Page::SupplierEdit(id) => view! { <SupplierFormPage id=id /> }.into_any(),
        Page::Logs => view! { <LogPage /> }.into_any(),
    }
}
