//! Entity Forms
//!
//! Editable state for every add/edit screen. Text inputs are kept as typed
//! strings and only parsed when the form is validated.

mod bom;
mod currency;
mod location;
mod sales;
mod supplier;
mod work_centre;
mod work_order;

pub use bom::{BomForm, DUPLICATE_BOM_LINE};
pub use currency::{CurrencyForm, ExchangeRateForm};
pub use location::LocationForm;
pub use sales::{CustomerForm, SalesPersonForm, SalesPosForm};
pub use supplier::SupplierForm;
pub use work_centre::WorkCentreForm;
pub use work_order::WorkOrderForm;

use crate::view::form::parse_number;

/// Trimmed copy of a text input
fn text(value: &str) -> String {
    value.trim().to_string()
}

/// Parsed number of an already validated field
fn number(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}
