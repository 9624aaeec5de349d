//! Work Order Pages
//!
//! The order list carries the workflow buttons; each transition is computed
//! locally and saved with a single `PUT`.

use erp_core::domain::{DomainResult, InventoryLocation, Item, WorkOrder, WorkOrderType};
use erp_core::forms::WorkOrderForm;
use erp_core::view::crossref::{item_description, label_or_code, location_name};
use erp_core::view::workflow::{self, bom_parent_candidates, work_order_actions, work_order_status};
use erp_core::view::Topic;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{amount, date, page_header, typed_number};
use crate::components::{
    apply_mutation, date_field, form_shell, id_value, parse_id, remote_table, select_field, text_field,
    use_collection, use_list_state, Column, DeleteConfirmButton, FormController,
};
use crate::context::{AppContext, Page};
use crate::store::{store_notify_failed, use_app_store};

/// Step that needs a quantity or amount before it can run
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Produce,
    AddCosts,
}

impl Step {
    fn prompt(&self) -> &'static str {
        match self {
            Step::Produce => "Quantity produced",
            Step::AddCosts => "Additional cost",
        }
    }
}

#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let orders = use_collection::<WorkOrder>(Topic::WorkOrders, "work orders");
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");
    let state = use_list_state();

    let pending = RwSignal::new(None::<(Step, WorkOrder)>);
    let entered = RwSignal::new(String::new());

    let persist = move |updated: DomainResult<WorkOrder>, done: &'static str| match updated {
        Ok(order) => spawn_local(async move {
            let mutation = ctx.collection::<WorkOrder>("work orders").replace(&order).await;
            apply_mutation(&store, orders, Topic::WorkOrders, mutation, done);
        }),
        Err(err) => {
            log::warn!("[FORM] Work order transition rejected: {}", err);
            store_notify_failed(&store, err.user_message());
        }
    };

    let delete_order = move |id: u32| {
        spawn_local(async move {
            let mutation = ctx.collection::<WorkOrder>("work orders").delete(&id).await;
            apply_mutation(&store, orders, Topic::WorkOrders, mutation, "The work order has been deleted");
        });
    };

    let confirm_step = move || {
        let Some((step, order)) = pending.get_untracked() else {
            return;
        };
        let Some(value) = typed_number(&entered.get_untracked()) else {
            store_notify_failed(&store, "Enter a number");
            return;
        };
        pending.set(None);
        entered.set(String::new());
        match step {
            Step::Produce => persist(workflow::produce(&order, value), "Production has been entered"),
            Step::AddCosts => persist(workflow::add_costs(&order, value), "Costs have been added"),
        }
    };

    let actions = Column::new("", move |order: &WorkOrder| {
        let allowed = work_order_actions(order);
        if allowed.is_view_only() {
            return view! { <span class="view-only">"View"</span> }.into_any();
        }
        let id = order.id;
        let subject = format!("work order {}", order.wo_ref);
        let (release, close, produce, costs) = (order.clone(), order.clone(), order.clone(), order.clone());
        view! {
            <span class="row-actions">
                {allowed.edit.then(|| view! {
                    <button class="edit-btn" on:click=move |_| ctx.navigate(Page::WorkOrderEdit(Some(id)))>
                        "Edit"
                    </button>
                })}
                {allowed.delete.then(|| view! {
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        subject=subject.clone()
                        on_confirm=move |_| delete_order(id)
                    />
                })}
                {allowed.release.then(|| view! {
                    <button on:click=move |_| {
                        let today = chrono::Local::now().date_naive();
                        persist(workflow::release(&release, today), "The work order has been released");
                    }>
                        "Release"
                    </button>
                })}
                {allowed.issue.then(|| view! {
                    <span class="action-flag" title="Material issues are posted as stock moves">
                        "Issue"
                    </span>
                })}
                {allowed.add_costs.then(|| view! {
                    <button on:click=move |_| pending.set(Some((Step::AddCosts, costs.clone())))>
                        "Costs"
                    </button>
                })}
                {allowed.produce.then(|| view! {
                    <button on:click=move |_| pending.set(Some((Step::Produce, produce.clone())))>
                        "Produce"
                    </button>
                })}
                {allowed.close.then(|| view! {
                    <button on:click=move |_| persist(workflow::close(&close), "The work order has been closed")>
                        "Close"
                    </button>
                })}
            </span>
        }
        .into_any()
    });

    let columns = vec![
        Column::text("Reference", |o: &WorkOrder| o.wo_ref.clone()),
        Column::text("Type", |o: &WorkOrder| o.wo_type.label().to_string()),
        Column::text("Item", move |o: &WorkOrder| {
            items.with(|is| label_or_code(item_description(is, o.stock_id), o.stock_id))
        }),
        Column::text("Location", move |o: &WorkOrder| {
            locations.with(|ls| label_or_code(location_name(ls, &o.loc_code), &o.loc_code))
        }),
        Column::text("Required", |o: &WorkOrder| o.units_reqd.to_string()),
        Column::text("Produced", |o: &WorkOrder| o.units_issued.to_string()),
        Column::text("Date", |o: &WorkOrder| date(o.date)),
        Column::text("Required By", |o: &WorkOrder| date(o.required_by)),
        Column::text("Costs", |o: &WorkOrder| amount(o.additional_costs)),
        Column::text("Status", |o: &WorkOrder| work_order_status(o).to_string()),
        actions,
    ];

    view! {
        <section class="list-page">
            {page_header("Work Orders", Some(("Add Work Order", Page::WorkOrderEdit(None))))}
            {move || {
                pending
                    .get()
                    .map(|(step, order)| {
                        view! {
                            <div class="step-panel">
                                <span>{format!("{} for {}:", step.prompt(), order.wo_ref)}</span>
                                <input
                                    type="text"
                                    prop:value=move || entered.get()
                                    on:input=move |ev| entered.set(event_target_value(&ev))
                                />
                                <button on:click=move |_| confirm_step()>"Confirm"</button>
                                <button on:click=move |_| {
                                    pending.set(None);
                                    entered.set(String::new());
                                }>"Cancel"</button>
                            </div>
                        }
                    })
            }}
            {remote_table(orders, state, columns, false)}
        </section>
    }
}

#[component]
pub fn WorkOrderFormPage(id: Option<u32>) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let ctl = FormController::new(WorkOrderForm::dated(today), id, Topic::WorkOrders, "Work order", Page::WorkOrders);
    let items = use_collection::<Item>(Topic::Items, "items");
    let locations = use_collection::<InventoryLocation>(Topic::Locations, "locations");

    let types = Signal::derive(|| {
        WorkOrderType::ALL.iter().map(|t| (u8::from(*t).to_string(), t.label().to_string())).collect::<Vec<_>>()
    });
    let manufactured = Signal::derive(move || {
        items.with(|is| {
            bom_parent_candidates(is)
                .into_iter()
                .map(|i| (i.stock_id.to_string(), format!("{} - {}", i.stock_id, i.description)))
                .collect::<Vec<_>>()
        })
    });
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
        "Work Order",
        view! {
            {text_field(ctl, "Reference", "wo_ref", |f| f.wo_ref.clone(), |f, v| f.wo_ref = v)}
            {select_field(ctl, "Type", "wo_type", types, |f| u8::from(f.wo_type).to_string(), |f, v| {
                if let Some(kind) = v.parse::<u8>().ok().and_then(|n| WorkOrderType::try_from(n).ok()) {
                    f.wo_type = kind;
                }
            })}
            {select_field(ctl, "Item", "stock_id", manufactured, |f| id_value(f.stock_id), |f, v| {
                f.stock_id = parse_id(&v)
            })}
            {select_field(ctl, "Destination Location", "loc_code", location_choices, |f| f.loc_code.clone(), |f, v| {
                f.loc_code = v
            })}
            {text_field(ctl, "Quantity Required", "units_reqd", |f| f.units_reqd.clone(), |f, v| f.units_reqd = v)}
            {date_field(ctl, "Date", "date", |f| f.date.clone(), |f, v| f.date = v)}
            {date_field(ctl, "Date Required By", "required_by", |f| f.required_by.clone(), |f, v| {
                f.required_by = v
            })}
        },
    )
}
