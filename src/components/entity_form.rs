//! Entity Form
//!
//! Reactive wrapper around an `EntityForm`: load-on-mount for updates,
//! per-field edits that clear the field's error, and a single submit.

use erp_core::domain::Entity;
use erp_core::repository::Resource;
use erp_core::view::form::{self, apply_edit, load_for_edit, EntityForm, FormErrors, SubmitError, SubmitMode};
use erp_core::view::Topic;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Page};
use crate::store::{store_invalidate, store_notify_failed, store_notify_saved, use_app_store, AppStore};

type IdOf<F> = <<F as EntityForm>::Entity as Entity>::Id;

/// Signals behind one add/edit screen
pub struct FormController<F: EntityForm + Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FormErrors>,
    pub saving: RwSignal<bool>,
    /// Sibling records used for duplicate checks
    existing: RwSignal<Vec<F::Entity>>,
    mode: StoredValue<SubmitMode<IdOf<F>>>,
    back: StoredValue<Page>,
    topic: Topic,
    /// Entity name used in notices and log lines
    label: &'static str,
    ctx: AppContext,
    store: AppStore,
}

impl<F: EntityForm + Send + Sync + 'static> Clone for FormController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntityForm + Send + Sync + 'static> Copy for FormController<F> {}

impl<F> FormController<F>
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    /// `editing` selects update mode; the record is then fetched by id on mount
    pub fn new(initial: F, editing: Option<IdOf<F>>, topic: Topic, label: &'static str, back: Page) -> Self {
        let ctx = use_context::<AppContext>().expect("AppContext should be provided");
        let store = use_app_store();
        let mode = match editing {
            Some(id) => SubmitMode::Update(id),
            None => SubmitMode::Create,
        };
        let ctl = Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FormErrors::new()),
            saving: RwSignal::new(false),
            existing: RwSignal::new(Vec::new()),
            mode: StoredValue::new(mode),
            back: StoredValue::new(back),
            topic,
            label,
            ctx,
            store,
        };

        Effect::new(move |_| {
            let collection = ctl.ctx.collection::<F::Entity>(label);
            let mode = ctl.mode.get_value();
            spawn_local(async move {
                if let SubmitMode::Update(id) = &mode {
                    match load_for_edit::<F, _>(collection.repository(), id).await {
                        Ok(loaded) => ctl.form.set(loaded),
                        Err(err) => {
                            log::warn!("[FORM] {} {} could not be loaded: {}", label, id, err);
                            store_notify_failed(&ctl.store, err.user_message());
                        }
                    }
                }
                if let Ok(rows) = collection.fetch_all().await {
                    ctl.existing.set(rows);
                }
            });
        });

        ctl
    }

    pub fn is_update(&self) -> bool {
        self.mode.with_value(SubmitMode::is_update)
    }

    /// Apply one field edit and clear that field's error
    pub fn edit(&self, field: &'static str, edit: impl FnOnce(&mut F)) {
        self.form.update(|form| self.errors.update(|errors| apply_edit(form, errors, field, edit)));
    }

    pub fn error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|errors| errors.get(field).map(str::to_string))
    }

    pub fn cancel(&self) {
        self.ctx.navigate(self.back.get_value());
    }

    /// Validate and save once; navigate back on success
    pub fn submit(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let ctl = *self;
        let current = self.form.get_untracked();
        let existing = self.existing.get_untracked();
        let mode = self.mode.get_value();
        let repo = self.ctx.repo::<F::Entity>();
        self.saving.set(true);

        spawn_local(async move {
            let result = form::submit(&repo, &current, &existing, mode).await;
            ctl.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("[FORM] {} {} saved", ctl.label, saved.id());
                    store_invalidate(&ctl.store, ctl.topic);
                    store_notify_saved(&ctl.store, format!("{} has been saved", ctl.label));
                    ctl.ctx.navigate(ctl.back.get_value());
                }
                Err(SubmitError::Invalid(errors)) => ctl.errors.set(errors),
                Err(err) => store_notify_failed(&ctl.store, err.user_message()),
            }
        });
    }
}

// ========================
// Field Renderers
// ========================

/// Select value for an id; zero is "nothing chosen"
pub fn id_value(id: u32) -> String {
    if id == 0 {
        String::new()
    } else {
        id.to_string()
    }
}

pub fn parse_id(raw: &str) -> u32 {
    raw.parse().unwrap_or(0)
}

fn field_class<F>(ctl: FormController<F>, field: &'static str) -> impl Fn() -> &'static str + Send + Sync + 'static
where
    F: EntityForm + Send + Sync + 'static,
{
    move || if ctl.errors.with(|e| e.get(field).is_some()) { "form-field has-error" } else { "form-field" }
}

fn field_error<F: EntityForm + Send + Sync + 'static>(ctl: FormController<F>, field: &'static str) -> impl IntoView {
    move || {
        ctl.errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <span class="field-error">{message}</span> })
    }
}

fn input_field<F>(
    ctl: FormController<F>,
    kind: &'static str,
    label: &'static str,
    field: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    view! {
        <div class=field_class(ctl, field)>
            <label>{label}</label>
            <input
                type=kind
                name=field
                prop:value=move || ctl.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctl.edit(field, |form| set(form, value));
                }
            />
            {field_error(ctl, field)}
        </div>
    }
}

pub fn text_field<F>(
    ctl: FormController<F>,
    label: &'static str,
    field: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    input_field(ctl, "text", label, field, get, set)
}

/// ISO date input; the browser submits `YYYY-MM-DD`
pub fn date_field<F>(
    ctl: FormController<F>,
    label: &'static str,
    field: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    input_field(ctl, "date", label, field, get, set)
}

pub fn textarea_field<F>(
    ctl: FormController<F>,
    label: &'static str,
    field: &'static str,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    view! {
        <div class=field_class(ctl, field)>
            <label>{label}</label>
            <textarea
                name=field
                prop:value=move || ctl.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctl.edit(field, |form| set(form, value));
                }
            />
            {field_error(ctl, field)}
        </div>
    }
}

pub fn checkbox_field<F>(
    ctl: FormController<F>,
    label: &'static str,
    field: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    view! {
        <div class=field_class(ctl, field)>
            <label>
                <input
                    type="checkbox"
                    name=field
                    prop:checked=move || ctl.form.with(get)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ctl.edit(field, |form| set(form, checked));
                    }
                />
                {label}
            </label>
            {field_error(ctl, field)}
        </div>
    }
}

/// Dropdown over `(value, label)` pairs with an empty "Select..." entry
pub fn select_field<F>(
    ctl: FormController<F>,
    label: &'static str,
    field: &'static str,
    options: Signal<Vec<(String, String)>>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    view! {
        <div class=field_class(ctl, field)>
            <label>{label}</label>
            <select
                name=field
                prop:value=move || ctl.form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctl.edit(field, |form| set(form, value));
                }
            >
                <option value="">"Select..."</option>
                {move || {
                    let current = ctl.form.with(get);
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {field_error(ctl, field)}
        </div>
    }
}

/// Title, fields and the Save/Cancel row
pub fn form_shell<F>(ctl: FormController<F>, title: &'static str, fields: impl IntoView + 'static) -> impl IntoView
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Resource,
{
    let heading = if ctl.is_update() { format!("Edit {}", title) } else { format!("New {}", title) };
    view! {
        <section class="form-page">
            <h2>{heading}</h2>
            <form on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                ctl.submit();
            }>
                {fields}
                <div class="form-actions">
                    <button type="submit" disabled=move || ctl.saving.get()>
                        {if ctl.is_update() { "Update" } else { "Save" }}
                    </button>
                    <button type="button" on:click=move |_| ctl.cancel()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
