//! Purchasing Pages

use erp_core::domain::{Currency, Supplier};
use erp_core::forms::SupplierForm;
use erp_core::view::Topic;
use leptos::prelude::*;

use super::{amount, page_header, yes_no};
use crate::components::{
    checkbox_field, edit_delete_column, form_shell, inactive_column, remote_table, select_field, text_field,
    textarea_field, use_collection, use_list_state, Column, FormController,
};
use crate::context::Page;

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let rows = use_collection::<Supplier>(Topic::Suppliers, "suppliers");
    let state = use_list_state();

    let columns = vec![
        Column::text("Name", |s: &Supplier| s.supp_name.clone()),
        Column::text("Short Name", |s: &Supplier| s.supp_ref.clone()),
        Column::text("Contact", |s: &Supplier| s.contact.clone()),
        Column::text("Currency", |s: &Supplier| s.curr_code.clone()),
        Column::text("Credit Limit", |s: &Supplier| amount(s.credit_limit)),
        Column::text("Tax Included", |s: &Supplier| yes_no(s.tax_included)),
        inactive_column(rows, Topic::Suppliers, "suppliers"),
        edit_delete_column(rows, Topic::Suppliers, "suppliers", |s| Page::SupplierEdit(Some(s.supplier_id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Suppliers", Some(("Add Supplier", Page::SupplierEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn SupplierFormPage(id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(SupplierForm::default(), id, Topic::Suppliers, "Supplier", Page::Suppliers);
    let currencies = use_collection::<Currency>(Topic::Currencies, "currencies");
    let currency_choices = Signal::derive(move || {
        currencies.with(|cs| {
            cs.iter()
                .filter(|c| !c.inactive)
                .map(|c| (c.currency_abbreviation.clone(), c.currency_name.clone()))
                .collect::<Vec<_>>()
        })
    });

    form_shell(
        ctl,
        "Supplier",
        view! {
            {text_field(ctl, "Supplier Name", "supp_name", |f| f.supp_name.clone(), |f, v| f.supp_name = v)}
            {text_field(ctl, "Supplier Short Name", "supp_ref", |f| f.supp_ref.clone(), |f, v| f.supp_ref = v)}
            {textarea_field(ctl, "Address", "address", |f| f.address.clone(), |f, v| f.address = v)}
            {text_field(ctl, "GST No", "gst_no", |f| f.gst_no.clone(), |f, v| f.gst_no = v)}
            {text_field(ctl, "Contact Person", "contact", |f| f.contact.clone(), |f, v| f.contact = v)}
            {select_field(ctl, "Supplier's Currency", "curr_code", currency_choices, |f| f.curr_code.clone(), |f, v| {
                f.curr_code = v
            })}
            {text_field(ctl, "Credit Limit", "credit_limit", |f| f.credit_limit.clone(), |f, v| f.credit_limit = v)}
            {checkbox_field(ctl, "Prices contain tax included", "tax_included", |f| f.tax_included, |f, v| {
                f.tax_included = v
            })}
            {textarea_field(ctl, "General Notes", "notes", |f| f.notes.clone(), |f, v| f.notes = v)}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}
