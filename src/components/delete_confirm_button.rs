//! Delete Confirm Button Component
//!
//! Row-level delete with a second, named confirmation step. Nothing reaches
//! the server until the user answers "Yes"; "No" puts the row back as it was.

use leptos::prelude::*;

/// Question shown once the row's delete button has been pressed
fn confirm_prompt(subject: &str) -> String {
    if subject.trim().is_empty() {
        "Delete this record?".to_string()
    } else {
        format!("Delete {}?", subject.trim())
    }
}

/// Delete button for one table row
///
/// `subject` names the record (for example `"currencies 3"`); it labels the
/// button for screen readers and is repeated in the confirmation question.
/// `on_confirm` only runs after the user answers "Yes".
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, optional)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let prompt = confirm_prompt(&subject);
    let label = format!("Delete {}", subject.trim()).trim_end().to_string();

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" role="alertdialog" aria-label=prompt.clone()>
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    aria-label=label.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}
