//! Sales Pages
//!
//! Sales persons, points of sale, customers and the order list.

use erp_core::domain::{Currency, Customer, InventoryLocation, SalesOrder, SalesPerson, SalesPos, SalesType};
use erp_core::forms::{CustomerForm, SalesPersonForm, SalesPosForm};
use erp_core::view::crossref::{customer_name, label_or_code, location_name, resolve};
use erp_core::view::Topic;
use leptos::prelude::*;

use super::{amount, date, page_header, yes_no};
use crate::components::{
    checkbox_field, edit_delete_column, form_shell, inactive_column, id_value, parse_id, remote_table, select_field,
    text_field, textarea_field, use_collection, use_list_state, Column, FormController,
};
use crate::context::Page;

// ========================
// Sales Persons
// ========================

#[component]
pub fn SalesPersonsPage() -> impl IntoView {
    let rows = use_collection::<SalesPerson>(Topic::SalesPersons, "sales persons");
    let state = use_list_state();

    let columns = vec![
        Column::text("Name", |p: &SalesPerson| p.salesman_name.clone()),
        Column::text("Phone", |p: &SalesPerson| p.salesman_phone.clone()),
        Column::text("Fax", |p: &SalesPerson| p.salesman_fax.clone()),
        Column::text("E-mail", |p: &SalesPerson| p.salesman_email.clone()),
        Column::text("Provision", |p: &SalesPerson| format!("{}%", p.provision)),
        Column::text("Break Pt.", |p: &SalesPerson| amount(p.break_pt)),
        inactive_column(rows, Topic::SalesPersons, "sales persons"),
        edit_delete_column(rows, Topic::SalesPersons, "sales persons", |p| Page::SalesPersonEdit(Some(p.id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Sales Persons", Some(("Add Sales Person", Page::SalesPersonEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn SalesPersonFormPage(id: Option<u32>) -> impl IntoView {
    let ctl =
        FormController::new(SalesPersonForm::default(), id, Topic::SalesPersons, "Sales person", Page::SalesPersons);

    form_shell(
        ctl,
        "Sales Person",
        view! {
            {text_field(ctl, "Name", "salesman_name", |f| f.salesman_name.clone(), |f, v| f.salesman_name = v)}
            {text_field(ctl, "Telephone", "salesman_phone", |f| f.salesman_phone.clone(), |f, v| f.salesman_phone = v)}
            {text_field(ctl, "Fax", "salesman_fax", |f| f.salesman_fax.clone(), |f, v| f.salesman_fax = v)}
            {text_field(ctl, "E-mail", "salesman_email", |f| f.salesman_email.clone(), |f, v| f.salesman_email = v)}
            {text_field(ctl, "Provision %", "provision", |f| f.provision.clone(), |f, v| f.provision = v)}
            {text_field(ctl, "Turnover Break Pt. Level", "break_pt", |f| f.break_pt.clone(), |f, v| f.break_pt = v)}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

// ========================
// Points of Sale
// ========================

#[component]
pub fn SalesPointsPage() -> impl IntoView {
    let rows = use_collection::<SalesPos>(Topic::SalesPoints, "points of sale");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let state = use_list_state();

    let columns = vec![
        Column::text("POS Name", |p: &SalesPos| p.pos_name.clone()),
        Column::text("Cash Sale", |p: &SalesPos| yes_no(p.cash_sale)),
        Column::text("Credit Sale", |p: &SalesPos| yes_no(p.credit_sale)),
        Column::text("Location", move |p: &SalesPos| {
            locations.with(|ls| label_or_code(location_name(ls, &p.pos_location), &p.pos_location))
        }),
        Column::text("Cash Account", |p: &SalesPos| id_value(p.pos_account)),
        inactive_column(rows, Topic::SalesPoints, "points of sale"),
        edit_delete_column(rows, Topic::SalesPoints, "points of sale", |p| Page::SalesPosEdit(Some(p.id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Points of Sale", Some(("Add Point of Sale", Page::SalesPosEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn SalesPosFormPage(id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(SalesPosForm::default(), id, Topic::SalesPoints, "Point of sale", Page::SalesPoints);
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let location_choices = Signal::derive(move || {
        locations.with(|ls| {
            ls.iter()
                .filter(|l| !l.inactive)
                .map(|l| (l.loc_code.clone(), l.location_name.clone()))
                .collect::<Vec<_>>()
        })
    });

    form_shell(
        ctl,
        "Point of Sale",
        view! {
            {text_field(ctl, "Point of Sale Name", "pos_name", |f| f.pos_name.clone(), |f, v| f.pos_name = v)}
            {checkbox_field(ctl, "Allowed credit sale terms selection", "credit_sale", |f| f.credit_sale, |f, v| {
                f.credit_sale = v
            })}
            {checkbox_field(ctl, "Allowed cash sale terms selection", "cash_sale", |f| f.cash_sale, |f, v| {
                f.cash_sale = v
            })}
            <Show when=move || ctl.form.with(|f| f.cash_sale)>
                {text_field(ctl, "Default Cash Account", "pos_account", |f| id_value(f.pos_account), |f, v| {
                    f.pos_account = parse_id(&v)
                })}
            </Show>
            {select_field(ctl, "POS Location", "pos_location", location_choices, |f| f.pos_location.clone(), |f, v| {
                f.pos_location = v
            })}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

// ========================
// Customers
// ========================

#[component]
pub fn CustomersPage() -> impl IntoView {
    let rows = use_collection::<Customer>(Topic::Customers, "customers");
    let sales_types = use_collection::<SalesType>(Topic::SalesTypes, "sales types");
    let state = use_list_state();

    let columns = vec![
        Column::text("Name", |c: &Customer| c.name.clone()),
        Column::text("Short Name", |c: &Customer| c.debtor_ref.clone()),
        Column::text("Currency", |c: &Customer| c.curr_code.clone()),
        Column::text("Sales Type", move |c: &Customer| {
            sales_types.with(|ts| {
                label_or_code(resolve(ts, &c.sales_type, |t| &t.id, |t| t.sales_type.as_str()), c.sales_type)
            })
        }),
        Column::text("Credit Limit", |c: &Customer| amount(c.credit_limit)),
        inactive_column(rows, Topic::Customers, "customers"),
        edit_delete_column(rows, Topic::Customers, "customers", |c| Page::CustomerEdit(Some(c.debtor_no))),
    ];

    view! {
        <section class="list-page">
            {page_header("Customers", Some(("Add Customer", Page::CustomerEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn CustomerFormPage(id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(CustomerForm::default(), id, Topic::Customers, "Customer", Page::Customers);
    let currencies = use_collection::<Currency>(Topic::Currencies, "currencies");
    let sales_types = use_collection::<SalesType>(Topic::SalesTypes, "sales types");

    let currency_choices = Signal::derive(move || {
        currencies.with(|cs| {
            cs.iter()
                .filter(|c| !c.inactive)
                .map(|c| (c.currency_abbreviation.clone(), c.currency_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let type_choices = Signal::derive(move || {
        sales_types.with(|ts| {
            ts.iter().filter(|t| !t.inactive).map(|t| (t.id.to_string(), t.sales_type.clone())).collect::<Vec<_>>()
        })
    });

    form_shell(
        ctl,
        "Customer",
        view! {
            {text_field(ctl, "Customer Name", "name", |f| f.name.clone(), |f, v| f.name = v)}
            {text_field(ctl, "Customer Short Name", "debtor_ref", |f| f.debtor_ref.clone(), |f, v| f.debtor_ref = v)}
            {textarea_field(ctl, "Address", "address", |f| f.address.clone(), |f, v| f.address = v)}
            {text_field(ctl, "GST No", "tax_id", |f| f.tax_id.clone(), |f, v| f.tax_id = v)}
            {select_field(ctl, "Customer's Currency", "curr_code", currency_choices, |f| f.curr_code.clone(), |f, v| {
                f.curr_code = v
            })}
            {select_field(ctl, "Sales Type/Price List", "sales_type", type_choices, |f| id_value(f.sales_type), |f, v| {
                f.sales_type = parse_id(&v)
            })}
            {text_field(ctl, "Credit Limit", "credit_limit", |f| f.credit_limit.clone(), |f, v| f.credit_limit = v)}
            {textarea_field(ctl, "General Notes", "notes", |f| f.notes.clone(), |f, v| f.notes = v)}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

// ========================
// Sales Orders
// ========================

#[component]
pub fn SalesOrdersPage() -> impl IntoView {
    let rows = use_collection::<SalesOrder>(Topic::SalesOrders, "sales orders");
    let customers = use_collection::<Customer>(Topic::Customers, "customers");
    let state = use_list_state();

    let columns = vec![
        Column::text("Order #", |o: &SalesOrder| o.order_no.to_string()),
        Column::text("Ref", |o: &SalesOrder| o.reference.clone()),
        Column::text("Customer", move |o: &SalesOrder| {
            customers.with(|cs| label_or_code(customer_name(cs, o.debtor_no), o.debtor_no))
        }),
        Column::text("Cust Order Ref", |o: &SalesOrder| o.customer_ref.clone()),
        Column::text("Order Date", |o: &SalesOrder| date(o.ord_date)),
        Column::text("Required By", |o: &SalesOrder| o.delivery_date.map(date).unwrap_or_default()),
        Column::text("Delivery From", |o: &SalesOrder| o.from_stk_loc.clone()),
        Column::text("Order Total", |o: &SalesOrder| amount(o.total)),
    ];

    view! {
        <section class="list-page">
            {page_header("Sales Orders", None)}
            {remote_table(rows, state, columns, false)}
        </section>
    }
}
