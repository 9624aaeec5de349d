//! Pages
//!
//! One module per business area. List pages fetch their collections on
//! mount; form pages wrap an `EntityForm` in a `FormController`.

mod banking;
mod inventory;
mod logs;
mod manufacturing;
mod purchasing;
mod sales;
mod work_orders;

pub use banking::{CurrenciesPage, CurrencyFormPage, ExchangeRateFormPage, ExchangeRatesPage};
pub use inventory::{ItemsPage, LocationFormPage, LocationsPage, TransfersPage};
pub use logs::LogPage;
pub use manufacturing::{BomFormPage, BomPage, WhereUsedPage, WorkCentreFormPage, WorkCentresPage};
pub use purchasing::{SupplierFormPage, SuppliersPage};
pub use sales::{
    CustomerFormPage, CustomersPage, SalesOrdersPage, SalesPersonFormPage, SalesPersonsPage, SalesPointsPage,
    SalesPosFormPage,
};
pub use work_orders::{WorkOrderFormPage, WorkOrdersPage};

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::{AppContext, Page};

/// Title row with an optional "Add ..." button
fn page_header(title: &'static str, add: Option<(&'static str, Page)>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    view! {
        <div class="page-header">
            <h2>{title}</h2>
            {add.map(|(label, target)| {
                view! {
                    <button class="add-btn" on:click=move |_| ctx.navigate(target.clone())>
                        {label}
                    </button>
                }
            })}
        </div>
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Parsed numeric input, for inputs that are not part of an `EntityForm`
fn typed_number(raw: &str) -> Option<f64> {
    erp_core::view::form::parse_number(raw)
}
