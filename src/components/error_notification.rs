//! Error Notification Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Dismissable banner showing the current error, hidden when there is none
#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    view! {
        <div
            data-cy="ErrorNotification"
            class=move || {
                if store.error().read().is_some() {
                    "notification is-danger is-light has-text-weight-normal"
                } else {
                    "notification is-danger is-light has-text-weight-normal hidden"
                }
            }
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.sync().dismiss_error()
            />
            {move || store.error().get().map(|notice| notice.message).unwrap_or_default()}
        </div>
    }
}
