//! Inventory Pages
//!
//! Locations, the item list and transfers.

use erp_core::domain::{InventoryLocation, InventoryTransfer, Item, ItemCategory};
use erp_core::forms::LocationForm;
use erp_core::view::crossref::{category_name, label_or_code, transfer_rows, TransferRow};
use erp_core::view::Topic;
use leptos::prelude::*;

use super::{date, page_header, yes_no};
use crate::components::{
    checkbox_field, edit_delete_column, form_shell, inactive_column, remote_table, text_field, textarea_field,
    use_collection, use_list_state, Column, FormController,
};
use crate::context::{AppContext, Page};

#[component]
pub fn LocationsPage() -> impl IntoView {
    let rows = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let state = use_list_state();

    let columns = vec![
        Column::text("Location Code", |l: &InventoryLocation| l.loc_code.clone()),
        Column::text("Location Name", |l: &InventoryLocation| l.location_name.clone()),
        Column::text("Address", |l: &InventoryLocation| l.delivery_address.clone()),
        Column::text("Phone", |l: &InventoryLocation| l.phone.clone()),
        Column::text("Fixed Asset", |l: &InventoryLocation| yes_no(l.fixed_asset)),
        inactive_column(rows, Topic::Locations, "locations"),
        edit_delete_column(rows, Topic::Locations, "locations", |l| Page::LocationEdit(Some(l.loc_code.clone()))),
    ];

    view! {
        <section class="list-page">
            {page_header("Inventory Locations", Some(("Add Location", Page::LocationEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn LocationFormPage(code: Option<String>) -> impl IntoView {
    let ctl = FormController::new(LocationForm::default(), code, Topic::Locations, "Location", Page::Locations);

    // The code is the key; it cannot change once saved
    let code_field = move || {
        if ctl.is_update() {
            view! {
                <div class="form-field">
                    <label>"Location Code"</label>
                    <span class="readonly">{move || ctl.form.with(|f| f.loc_code.clone())}</span>
                </div>
            }
            .into_any()
        } else {
            text_field(ctl, "Location Code", "loc_code", |f| f.loc_code.clone(), |f, v| f.loc_code = v).into_any()
        }
    };

    form_shell(
        ctl,
        "Location",
        view! {
            {code_field}
            {text_field(ctl, "Location Name", "location_name", |f| f.location_name.clone(), |f, v| f.location_name = v)}
            {textarea_field(ctl, "Address", "delivery_address", |f| f.delivery_address.clone(), |f, v| {
                f.delivery_address = v
            })}
            {text_field(ctl, "Phone", "phone", |f| f.phone.clone(), |f, v| f.phone = v)}
            {text_field(ctl, "Fax", "fax", |f| f.fax.clone(), |f, v| f.fax = v)}
            {text_field(ctl, "E-mail", "email", |f| f.email.clone(), |f, v| f.email = v)}
            {text_field(ctl, "Contact", "contact", |f| f.contact.clone(), |f, v| f.contact = v)}
            {checkbox_field(ctl, "Fixed Asset Location", "fixed_asset", |f| f.fixed_asset, |f, v| f.fixed_asset = v)}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

/// Items are maintained elsewhere; this screen lists them and links to BOMs
#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let rows = use_collection::<Item>(Topic::Items, "items");
    let categories = use_collection::<ItemCategory>(Topic::ItemCategories, "item categories");
    let state = use_list_state();

    let columns = vec![
        Column::text("Item Code", |i: &Item| i.stock_id.to_string()),
        Column::text("Description", |i: &Item| i.description.clone()),
        Column::text("Category", move |i: &Item| {
            categories.with(|cs| label_or_code(category_name(cs, i.category_id), i.category_id))
        }),
        Column::text("Units", |i: &Item| i.units.clone()),
        Column::text("Type", |i: &Item| i.mb_flag.label().to_string()),
        Column::new("", move |i: &Item| {
            let stock_id = i.stock_id;
            i.is_manufactured()
                .then(|| {
                    view! {
                        <button class="bom-btn" on:click=move |_| ctx.navigate(Page::Boms(Some(stock_id)))>
                            "BOM"
                        </button>
                    }
                })
                .into_any()
        }),
        inactive_column(rows, Topic::Items, "items"),
    ];

    view! {
        <section class="list-page">
            {page_header("Items", None)}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn TransfersPage() -> impl IntoView {
    let transfers = use_collection::<InventoryTransfer>(Topic::Transfers, "transfers");
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let state = use_list_state();

    let rows = Memo::new(move |_| {
        transfers.with(|ts| items.with(|is| locations.with(|ls| transfer_rows(ts, is, ls))))
    });

    let columns = vec![
        Column::text("Reference", |r: &TransferRow| r.transfer.reference.clone()),
        Column::text("Date", |r: &TransferRow| date(r.transfer.date)),
        Column::text("Item", |r: &TransferRow| r.item_description.clone()),
        Column::text("From", |r: &TransferRow| r.from_name.clone()),
        Column::text("To", |r: &TransferRow| r.to_name.clone()),
        Column::text("Quantity", |r: &TransferRow| r.transfer.quantity.to_string()),
    ];

    view! {
        <section class="list-page">
            {page_header("Inventory Transfers", None)}
            {remote_table(rows, state, columns, false)}
        </section>
    }
}
