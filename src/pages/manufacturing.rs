//! Manufacturing Pages
//!
//! Work centres, bills of material and the where-used inquiry.

use erp_core::domain::{Bom, InventoryLocation, Item, WorkCentre};
use erp_core::forms::{BomForm, WorkCentreForm};
use erp_core::view::crossref::{bom_rows, item_description, label_or_code, where_used, BomRow, WhereUsedRow};
use erp_core::view::workflow::{bom_component_candidates, bom_parent_candidates};
use erp_core::view::Topic;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::page_header;
use crate::components::{
    apply_mutation, checkbox_field, edit_delete_column, form_shell, inactive_column, id_value, parse_id,
    remote_table, select_field, text_field, textarea_field, use_collection, use_list_state, Column,
    DeleteConfirmButton, FormController,
};
use crate::context::{AppContext, Page};
use crate::store::use_app_store;

fn item_options(items: &[&Item]) -> Vec<(String, String)> {
    items.iter().map(|i| (i.stock_id.to_string(), format!("{} - {}", i.stock_id, i.description))).collect()
}

fn location_options(locations: &[InventoryLocation]) -> Vec<(String, String)> {
    locations
        .iter()
        .filter(|l| !l.inactive)
        .map(|l| (l.loc_code.clone(), l.location_name.clone()))
        .collect()
}

// ========================
// Work Centres
// ========================

#[component]
pub fn WorkCentresPage() -> impl IntoView {
    let rows = use_collection::<WorkCentre>(Topic::WorkCentres, "work centres");
    let state = use_list_state();

    let columns = vec![
        Column::text("Name", |w: &WorkCentre| w.name.clone()),
        Column::text("Description", |w: &WorkCentre| w.description.clone()),
        inactive_column(rows, Topic::WorkCentres, "work centres"),
        edit_delete_column(rows, Topic::WorkCentres, "work centres", |w| Page::WorkCentreEdit(Some(w.id))),
    ];

    view! {
        <section class="list-page">
            {page_header("Work Centres", Some(("Add Work Centre", Page::WorkCentreEdit(None))))}
            {remote_table(rows, state, columns, true)}
        </section>
    }
}

#[component]
pub fn WorkCentreFormPage(id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(WorkCentreForm::default(), id, Topic::WorkCentres, "Work centre", Page::WorkCentres);

    form_shell(
        ctl,
        "Work Centre",
        view! {
            {text_field(ctl, "Name", "name", |f| f.name.clone(), |f, v| f.name = v)}
            {textarea_field(ctl, "Description", "description", |f| f.description.clone(), |f, v| f.description = v)}
            {checkbox_field(ctl, "Inactive", "inactive", |f| f.inactive, |f, v| f.inactive = v)}
        },
    )
}

// ========================
// Bills of Material
// ========================

/// Component lines of one manufactured item
#[component]
pub fn BomPage(parent: Option<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let boms = use_collection::<Bom>(Topic::Boms, "bills of material");
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let work_centres = use_collection::<WorkCentre>(Topic::WorkCentres, "work centres");
    let state = use_list_state();
    let selected = RwSignal::new(parent);

    let rows = Memo::new(move |_| match selected.get() {
        Some(parent) => boms.with(|bs| {
            items.with(|is| locations.with(|ls| work_centres.with(|ws| bom_rows(bs, parent, is, ls, ws))))
        }),
        None => Vec::new(),
    });

    let parent_options = move || {
        let current = selected.get().map(id_value).unwrap_or_default();
        items.with(|is| {
            item_options(&bom_parent_candidates(is))
                .into_iter()
                .map(|(value, text)| {
                    let chosen = value == current;
                    view! { <option value=value selected=chosen>{text}</option> }
                })
                .collect_view()
        })
    };

    let delete_line = move |id: u32| {
        spawn_local(async move {
            let mutation = ctx.collection::<Bom>("bills of material").delete(&id).await;
            apply_mutation(&store, boms, Topic::Boms, mutation, "The component has been deleted");
        });
    };

    let columns = vec![
        Column::text("Component", |r: &BomRow| format!("{} - {}", r.bom.component, r.component_description)),
        Column::text("Location", |r: &BomRow| r.location_name.clone()),
        Column::text("Work Centre", |r: &BomRow| r.work_centre_name.clone()),
        Column::text("Quantity", |r: &BomRow| r.bom.quantity.to_string()),
        Column::new("", move |r: &BomRow| {
            let target = Page::BomEdit { parent: r.bom.parent, id: Some(r.bom.id) };
            let id = r.bom.id;
            let subject = format!("component {}", r.bom.component);
            view! {
                <span class="row-actions">
                    <button class="edit-btn" on:click=move |_| ctx.navigate(target.clone())>
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        subject=subject
                        on_confirm=move |_| delete_line(id)
                    />
                </span>
            }
            .into_any()
        }),
    ];

    view! {
        <section class="list-page">
            {page_header("Bills of Material", None)}
            <div class="form-field">
                <label>"Select a manufacturable item:"</label>
                <select on:change=move |ev| {
                    let id = parse_id(&event_target_value(&ev));
                    selected.set((id != 0).then_some(id));
                }>
                    <option value="">"Select..."</option>
                    {parent_options}
                </select>
            </div>
            <Show when=move || selected.get().is_some()>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        if let Some(parent) = selected.get_untracked() {
                            ctx.navigate(Page::BomEdit { parent, id: None });
                        }
                    }
                >
                    "Add Component"
                </button>
            </Show>
            {remote_table(rows, state, columns, false)}
        </section>
    }
}

#[component]
pub fn BomFormPage(parent: u32, id: Option<u32>) -> impl IntoView {
    let ctl = FormController::new(BomForm::for_parent(parent), id, Topic::Boms, "BOM line", Page::Boms(Some(parent)));
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let work_centres = use_collection::<WorkCentre>(Topic::WorkCentres, "work centres");

    let parent_label = move || items.with(|is| label_or_code(item_description(is, parent), parent));
    let components = Signal::derive(move || items.with(|is| item_options(&bom_component_candidates(is, parent))));
    let location_choices = Signal::derive(move || locations.with(|ls| location_options(ls)));
    let centre_choices = Signal::derive(move || {
        work_centres.with(|ws| {
            ws.iter().filter(|w| !w.inactive).map(|w| (w.id.to_string(), w.name.clone())).collect::<Vec<_>>()
        })
    });

    form_shell(
        ctl,
        "Component",
        view! {
            <div class="form-field">
                <label>"Parent Item"</label>
                <span class="readonly">{parent_label}</span>
            </div>
            {select_field(ctl, "Component", "component", components, |f| id_value(f.component), |f, v| {
                f.component = parse_id(&v)
            })}
            {select_field(ctl, "Location to Draw From", "loc_code", location_choices, |f| f.loc_code.clone(), |f, v| {
                f.loc_code = v
            })}
            {select_field(ctl, "Work Centre Added", "work_centre", centre_choices, |f| id_value(f.work_centre), |f, v| {
                f.work_centre = parse_id(&v)
            })}
            {text_field(ctl, "Quantity", "quantity", |f| f.quantity.clone(), |f, v| f.quantity = v)}
        },
    )
}

// ========================
// Where Used
// ========================

/// Which parents consume a given component
#[component]
pub fn WhereUsedPage() -> impl IntoView {
    let boms = use_collection::<Bom>(Topic::Boms, "bills of material");
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let state = use_list_state();
    let component = RwSignal::new(0u32);

    let rows = Memo::new(move |_| {
        let component = component.get();
        boms.with(|bs| items.with(|is| locations.with(|ls| where_used(bs, component, is, ls))))
    });

    let columns = vec![
        Column::text("Parent Item", |r: &WhereUsedRow| format!("{} - {}", r.parent, r.parent_description)),
        Column::text("Location", |r: &WhereUsedRow| r.location_name.clone()),
        Column::text("Quantity Required", |r: &WhereUsedRow| r.quantity.to_string()),
    ];

    view! {
        <section class="list-page">
            {page_header("Inventory Item Where Used Inquiry", None)}
            <div class="form-field">
                <label>"Select an item:"</label>
                <select on:change=move |ev| component.set(parse_id(&event_target_value(&ev)))>
                    <option value="">"Select..."</option>
                    {move || {
                        items.with(|is| {
                            item_options(&is.iter().collect::<Vec<_>>())
                                .into_iter()
                                .map(|(value, text)| view! { <option value=value>{text}</option> })
                                .collect_view()
                        })
                    }}
                </select>
            </div>
            {remote_table(rows, state, columns, false)}
        </section>
    }
}
