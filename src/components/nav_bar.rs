//! Navigation Bar Component
//!
//! Sections of the admin UI; the active entry follows the current page.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

const SECTIONS: &[(&str, &[(&str, Page)])] = &[
    (
        "Banking",
        &[("Currencies", Page::Currencies), ("Exchange Rates", Page::ExchangeRates)],
    ),
    (
        "Inventory",
        &[("Items", Page::Items), ("Locations", Page::Locations), ("Transfers", Page::Transfers)],
    ),
    (
        "Manufacturing",
        &[
            ("Work Centres", Page::WorkCentres),
            ("Bills of Material", Page::Boms(None)),
            ("Work Orders", Page::WorkOrders),
            ("Where Used", Page::WhereUsed),
        ],
    ),
    (
        "Sales",
        &[
            ("Customers", Page::Customers),
            ("Sales Orders", Page::SalesOrders),
            ("Sales Persons", Page::SalesPersons),
            ("Points of Sale", Page::SalesPoints),
        ],
    ),
    ("Purchasing", &[("Suppliers", Page::Suppliers)]),
    ("System", &[("Log", Page::Logs)]),
];

/// Whether `current` belongs to the section entry `entry`
fn is_within(current: &Page, entry: &Page) -> bool {
    use Page::*;
    matches!(
        (current, entry),
        (Currencies | CurrencyEdit(_), Currencies)
            | (ExchangeRates | ExchangeRateEdit(_), ExchangeRates)
            | (Locations | LocationEdit(_), Locations)
            | (Items, Items)
            | (WorkCentres | WorkCentreEdit(_), WorkCentres)
            | (Boms(_) | BomEdit { .. }, Boms(_))
            | (WorkOrders | WorkOrderEdit(_), WorkOrders)
            | (WhereUsed, WhereUsed)
            | (Transfers, Transfers)
            | (SalesPersons | SalesPersonEdit(_), SalesPersons)
            | (SalesPoints | SalesPosEdit(_), SalesPoints)
            | (Customers | CustomerEdit(_), Customers)
            | (SalesOrders, SalesOrders)
            | (Suppliers | SupplierEdit(_), Suppliers)
            | (Logs, Logs)
    )
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            {SECTIONS
                .iter()
                .map(|(section, entries)| {
                    view! {
                        <div class="nav-section">
                            <span class="nav-section-title">{*section}</span>
                            {entries
                                .iter()
                                .map(|(label, page)| {
                                    let target = page.clone();
                                    let entry = page.clone();
                                    view! {
                                        <button
                                            class=move || {
                                                if ctx.page.with(|current| is_within(current, &entry)) {
                                                    "nav-item active"
                                                } else {
                                                    "nav-item"
                                                }
                                            }
                                            on:click=move |_| ctx.navigate(target.clone())
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
