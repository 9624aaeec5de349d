//! Notice Bar Component
//!
//! Confirmation banner after a successful write, and the error modal for a
//! failed one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_notice, use_app_store, AppStateStoreFields, Notice};

const BANNER_MS: u32 = 3_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss confirmations unless a newer notice replaced them
    Effect::new(move |_| {
        if let Some(Notice::Saved(text)) = store.notice().get() {
            spawn_local(async move {
                TimeoutFuture::new(BANNER_MS).await;
                if store.notice().get_untracked() == Some(Notice::Saved(text)) {
                    store_clear_notice(&store);
                }
            });
        }
    });

    move || match store.notice().get() {
        Some(Notice::Saved(text)) => view! { <div class="notice-banner">{text}</div> }.into_any(),
        Some(Notice::Failed(text)) => view! {
            <div class="modal-backdrop">
                <div class="modal error-modal" role="alertdialog">
                    <h3>"Error"</h3>
                    <p>{text}</p>
                    <button on:click=move |_| store_clear_notice(&store)>"OK"</button>
                </div>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}
