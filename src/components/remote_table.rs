//! Remote Table
//!
//! Generic table over one fetched collection: search box, inactive toggle,
//! pager, and a single "No Records Found" row when nothing is visible.
//! Every mutation goes through `RemoteCollection`, which re-fetches once.

use std::sync::Arc;

use erp_core::domain::{Deactivatable, Listable};
use erp_core::repository::Resource;
use erp_core::view::{visible_rows, ListPage, ListState, Mutation, PageSize, Topic};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DeleteConfirmButton;
use crate::context::{AppContext, Page};
use crate::store::{
    store_invalidate_dependents, store_notify_failed, store_notify_saved, store_topic_memo, use_app_store,
    AppStore,
};

pub type Cell<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column
pub struct Column<T> {
    pub header: &'static str,
    pub cell: Cell<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self { header: self.header, cell: Arc::clone(&self.cell) }
    }
}

impl<T> Column<T> {
    pub fn new(header: &'static str, cell: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self { header, cell: Arc::new(cell) }
    }

    /// Plain text cell
    pub fn text(header: &'static str, value: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(header, move |row| value(row).into_any())
    }
}

/// Fetch `T` on mount and again whenever `topic` is invalidated.
/// A failed fetch is logged and the rows already shown stay.
pub fn use_collection<T>(topic: Topic, label: &'static str) -> RwSignal<Vec<T>>
where
    T: Resource,
{
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let rows = RwSignal::new(Vec::<T>::new());

    let version = store_topic_memo(store, topic);
    Effect::new(move |_| {
        let version = version.get();
        let collection = ctx.collection::<T>(label);
        log::debug!("[LIST] Loading {} (version {})", label, version);
        spawn_local(async move {
            if let Ok(loaded) = collection.fetch_all().await {
                rows.set(loaded);
            }
        });
    });

    rows
}

/// List state seeded with the configured page size
pub fn use_list_state() -> RwSignal<ListState> {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    RwSignal::new(ListState::new(ctx.page_size))
}

/// Table with toolbar and pager; `inactive_toggle` shows the "Show also Inactive" checkbox
pub fn remote_table<T>(
    rows: impl Into<Signal<Vec<T>>>,
    state: RwSignal<ListState>,
    columns: Vec<Column<T>>,
    inactive_toggle: bool,
) -> impl IntoView
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let rows: Signal<Vec<T>> = rows.into();
    let page = Memo::new(move |_| rows.with(|rows| state.with(|state| visible_rows(rows, state))));

    let span = columns.len().to_string();
    let headers = columns.iter().map(|column| view! { <th>{column.header}</th> }).collect_view();
    let body = move || {
        let current = page.get();
        if current.is_empty() {
            return view! {
                <tr>
                    <td class="empty-row" colspan=span.clone()>"No Records Found"</td>
                </tr>
            }
            .into_any();
        }
        current
            .rows
            .iter()
            .map(|row| {
                let cells = columns.iter().map(|column| view! { <td>{(column.cell)(row)}</td> }).collect_view();
                let class = if row.is_inactive() { "inactive" } else { "" };
                view! { <tr class=class>{cells}</tr> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-toolbar">
            <input
                type="search"
                placeholder="Search"
                prop:value=move || state.with(|s| s.filter_text.clone())
                on:input=move |ev| state.update(|s| s.set_filter_text(event_target_value(&ev)))
            />
            {inactive_toggle.then(|| view! {
                <label class="inactive-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.include_inactive)
                        on:change=move |ev| state.update(|s| s.set_include_inactive(event_target_checked(&ev)))
                    />
                    "Show also Inactive"
                </label>
            })}
        </div>
        <table class="data-table">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
        {pager(page, state)}
    }
}

fn pager<T>(page: Memo<ListPage<T>>, state: RwSignal<ListState>) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let on_size = move |ev: web_sys::Event| {
        let size = event_target_value(&ev)
            .parse::<i64>()
            .ok()
            .and_then(|n| PageSize::try_from(n).ok())
            .unwrap_or_default();
        state.update(|s| s.set_page_size(size));
    };

    view! {
        <div class="pager">
            <label>
                "Rows per page: "
                <select on:change=on_size>
                    {PageSize::OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=i64::from(size).to_string()
                                    selected=move || state.with(|s| s.page_size == size)
                                >
                                    {size.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="pager-range">{move || page.with(|p| p.range_label())}</span>
            <button
                disabled=move || !page.with(|p| p.has_previous())
                on:click=move |_| {
                    let shown = page.with_untracked(|p| p.page);
                    state.update(|s| s.set_page(shown.saturating_sub(1)));
                }
            >
                "‹"
            </button>
            <button
                disabled=move || !page.with(|p| p.has_next())
                on:click=move |_| {
                    let shown = page.with_untracked(|p| p.page);
                    state.update(|s| s.set_page(shown + 1));
                }
            >
                "›"
            </button>
        </div>
    }
}

// ========================
// Row Actions
// ========================

/// Show the reloaded rows and report the mutation outcome
pub fn apply_mutation<T>(store: &AppStore, rows: RwSignal<Vec<T>>, topic: Topic, mutation: Mutation<T>, done: &str)
where
    T: Send + Sync + 'static,
{
    if let Some(loaded) = mutation.reloaded {
        rows.set(loaded);
    }
    match mutation.outcome {
        Ok(()) => {
            store_invalidate_dependents(store, topic);
            store_notify_saved(store, done);
        }
        Err(err) => store_notify_failed(store, err.user_message()),
    }
}

fn delete_row<T: Resource>(
    ctx: AppContext,
    store: AppStore,
    rows: RwSignal<Vec<T>>,
    topic: Topic,
    label: &'static str,
    id: T::Id,
) {
    spawn_local(async move {
        let mutation = ctx.collection::<T>(label).delete(&id).await;
        apply_mutation(&store, rows, topic, mutation, "Record has been deleted");
    });
}

fn toggle_row<T: Resource + Deactivatable>(
    ctx: AppContext,
    store: AppStore,
    rows: RwSignal<Vec<T>>,
    topic: Topic,
    label: &'static str,
    row: T,
) {
    spawn_local(async move {
        let done = if row.is_inactive() { "Record has been activated" } else { "Record has been deactivated" };
        let mutation = ctx.collection::<T>(label).toggle_inactive(&row).await;
        apply_mutation(&store, rows, topic, mutation, done);
    });
}

/// "Inactive" checkbox per row; ticking or clearing it saves the flipped flag
pub fn inactive_column<T: Resource + Deactivatable>(
    rows: RwSignal<Vec<T>>,
    topic: Topic,
    label: &'static str,
) -> Column<T> {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    Column::new("Inactive", move |row: &T| {
        let toggled = row.clone();
        let title = format!("Inactive ({} {})", label, row.id());
        view! {
            <input
                type="checkbox"
                class="inactive-check"
                title=title
                prop:checked=row.is_inactive()
                on:change={move |_| toggle_row::<T>(ctx, store, rows, topic, label, toggled.clone())}
            />
        }
        .into_any()
    })
}

/// Edit and delete buttons
pub fn edit_delete_column<T: Resource + Listable>(
    rows: RwSignal<Vec<T>>,
    topic: Topic,
    label: &'static str,
    edit_page: fn(&T) -> Page,
) -> Column<T> {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    Column::new("", move |row: &T| {
        let target = edit_page(row);
        let id = row.id();
        let subject = format!("{} {}", label, id);
        view! {
            <span class="row-actions">
                <button class="edit-btn" on:click=move |_| ctx.navigate(target.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    subject=subject
                    on_confirm={move |_| delete_row::<T>(ctx, store, rows, topic, label, id.clone())}
                />
            </span>
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use erp_core::domain::Currency;
    use erp_core::{ApiClient, ApiConfig};
    use reactive_stores::Store;

    use super::*;
    use crate::store::AppState;

    fn with_app<R>(body: impl FnOnce() -> R) -> R {
        let owner = Owner::new();
        owner.set();
        provide_context(AppContext::new(
            ApiClient::new(&ApiConfig::default()),
            signal(Page::Currencies),
            PageSize::default(),
        ));
        provide_context(Store::new(AppState::default()));
        body()
    }

    #[test]
    fn test_deactivatable_tables_get_inactive_and_row_action_columns() {
        with_app(|| {
            let rows = RwSignal::new(Vec::<Currency>::new());
            let columns = [
                inactive_column(rows, Topic::Currencies, "currencies"),
                edit_delete_column(rows, Topic::Currencies, "currencies", |c: &Currency| {
                    Page::CurrencyEdit(Some(c.id))
                }),
            ];
            let headers: Vec<_> = columns.iter().map(|c| c.header).collect();
            assert_eq!(headers, vec!["Inactive", ""]);
        });
    }
}
